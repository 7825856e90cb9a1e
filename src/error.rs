use serde::{Deserialize, Serialize};
use std::fmt;

/// The one structured failure shape this layer ever surfaces. Anything a
/// caller can catch from the request pipeline or the rating store is either
/// a success or one of these — never a raw transport error.
///
/// `code` and `message` are mandatory on the wire; that requirement doubles
/// as the shape test when deciding whether a response body already carries
/// an envelope.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub dependency: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

/// Result alias used across the client: call sites pattern-match on this
/// instead of probing error shapes at runtime.
pub type ApiResult<T> = Result<T, ErrorEnvelope>;

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
            dependency: None,
            trace_id: None,
        }
    }

    /// Normalize a failure that still carries an HTTP response: if the body
    /// is an envelope, use it verbatim; otherwise synthesize
    /// `http_<status>` from whatever text is available.
    pub fn from_response_parts(status: u16, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            return envelope;
        }
        let message = if body.trim().is_empty() {
            status_reason(status).to_string()
        } else {
            body.to_string()
        };
        Self::new(format!("http_{status}"), message)
    }

    /// Normalize a failure that only exposes a message. A message that is
    /// itself a serialized envelope is unwrapped; anything else becomes a
    /// `client_error`.
    pub fn from_message(message: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(message) {
            return envelope;
        }
        let message = if message.is_empty() {
            "Unknown error"
        } else {
            message
        };
        Self::new("client_error", message)
    }

    /// Last-resort normalization for values that are neither responses nor
    /// message-carrying errors.
    pub fn from_unknown(value: impl fmt::Display) -> Self {
        let rendered = value.to_string();
        let message = if rendered.is_empty() {
            "Unknown error".to_string()
        } else {
            rendered
        };
        Self::new("unknown_error", message)
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ErrorEnvelope {}

/// Fold an arbitrary caught error into exactly one envelope. An envelope
/// already in the chain passes through untouched; everything else goes
/// through the message rule. This function never fails.
pub fn parse_api_error(err: &anyhow::Error) -> ErrorEnvelope {
    if let Some(envelope) = err.downcast_ref::<ErrorEnvelope>() {
        return envelope.clone();
    }
    ErrorEnvelope::from_message(&err.to_string())
}

fn status_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        413 => "Payload Too Large",
        415 => "Unsupported Media Type",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "HTTP error",
    }
}
