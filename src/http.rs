use crate::error::{ApiResult, ErrorEnvelope};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use tracing::debug;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// Low-level request pipeline. One instance per process is enough; every
/// call is a fresh network operation with no retries and no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> ApiResult<Self> {
        let user_agent = format!("cinescout/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .map_err(|e| ErrorEnvelope::from_message(&e.to_string()))?;
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Ok(Self {
            client,
            base,
            bearer_token: None,
        })
    }

    /// Reads `CINESCOUT_API_BASE` (falling back to a local backend) and the
    /// optional `CINESCOUT_API_TOKEN` shared credential.
    pub fn from_env() -> ApiResult<Self> {
        let base = env::var("CINESCOUT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let mut client = Self::new(base)?;
        client.bearer_token = env::var("CINESCOUT_API_TOKEN").ok().filter(|t| !t.is_empty());
        Ok(client)
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// GET `path` (always treated as rooted under the base prefix) and decode
    /// the JSON body as `T`.
    ///
    /// A non-success status yields the body's own envelope when it has one,
    /// or a synthesized `http_error` otherwise. A success body that is empty
    /// or fails to decode yields `Ok(None)` — success responses are trusted,
    /// so a bad body is an absent payload, not a failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        self.get_with_headers(path, HeaderMap::new()).await
    }

    /// Same as [`get`](Self::get) with extra headers; caller headers win over
    /// the default `Accept: application/json`.
    pub async fn get_with_headers<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: HeaderMap,
    ) -> ApiResult<Option<T>> {
        let url = format!("{}{}", self.base, rooted(path));

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.bearer_token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers.extend(extra);

        let res = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ErrorEnvelope::from_message(&e.to_string()))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| ErrorEnvelope::from_message(&e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(decode_failure(status, &body));
        }
        Ok(decode_success(&body))
    }
}

/// Root a path under the base prefix; a missing leading separator is added
/// so `search` and `/search` resolve identically.
pub(crate) fn rooted(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Non-success body handling: an envelope body (both `code` and `message`
/// present) is surfaced verbatim, anything else collapses to `http_error`.
pub(crate) fn decode_failure(status: u16, body: &str) -> ErrorEnvelope {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(_) => ErrorEnvelope::new("http_error", format!("HTTP {status}")),
    }
}

/// Success body handling: decode failures are logged and swallowed, leaving
/// the caller with an absent payload.
pub(crate) fn decode_success<T: DeserializeOwned>(body: &str) -> Option<T> {
    if body.trim().is_empty() {
        debug!("success response carried no body");
        return None;
    }
    match serde_json::from_str::<T>(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("success body failed to decode, treating as absent: {}", e);
            None
        }
    }
}
