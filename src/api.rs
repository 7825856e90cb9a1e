use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{
    DetailsResponse, Health, MoodResponse, Movie, Paged, ProvidersResponse,
    RecommendationsResponse, TrendingWindow,
};
use async_trait::async_trait;

/// One method per backend operation. The trait exists so views and tests can
/// substitute a fake catalog for the HTTP-backed client.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn health(&self) -> ApiResult<Option<Health>>;
    async fn search(&self, query: &str, page: u32) -> ApiResult<Option<Paged<Movie>>>;
    async fn details(&self, id: i64) -> ApiResult<Option<DetailsResponse>>;
    async fn recommendations(
        &self,
        id: i64,
        page: u32,
    ) -> ApiResult<Option<RecommendationsResponse>>;
    async fn providers(&self, id: i64, region: Option<&str>)
        -> ApiResult<Option<ProvidersResponse>>;
    async fn mood_recommendations(
        &self,
        mood: &str,
        page: u32,
        region: Option<&str>,
    ) -> ApiResult<Option<MoodResponse>>;
    async fn trending(&self, window: TrendingWindow) -> ApiResult<Option<Paged<Movie>>>;
    async fn popular(&self, page: u32) -> ApiResult<Option<Paged<Movie>>>;
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn health(&self) -> ApiResult<Option<Health>> {
        self.get("/health").await
    }

    async fn search(&self, query: &str, page: u32) -> ApiResult<Option<Paged<Movie>>> {
        self.get(&search_path(query, page)).await
    }

    async fn details(&self, id: i64) -> ApiResult<Option<DetailsResponse>> {
        self.get(&details_path(id)).await
    }

    async fn recommendations(
        &self,
        id: i64,
        page: u32,
    ) -> ApiResult<Option<RecommendationsResponse>> {
        self.get(&recommendations_path(id, page)).await
    }

    async fn providers(
        &self,
        id: i64,
        region: Option<&str>,
    ) -> ApiResult<Option<ProvidersResponse>> {
        self.get(&providers_path(id, region)).await
    }

    async fn mood_recommendations(
        &self,
        mood: &str,
        page: u32,
        region: Option<&str>,
    ) -> ApiResult<Option<MoodResponse>> {
        self.get(&mood_path(mood, page, region)).await
    }

    async fn trending(&self, window: TrendingWindow) -> ApiResult<Option<Paged<Movie>>> {
        self.get(&trending_path(window)).await
    }

    async fn popular(&self, page: u32) -> ApiResult<Option<Paged<Movie>>> {
        self.get(&popular_path(page)).await
    }
}

/// Details and provider availability for one movie, fetched concurrently.
/// The two requests race independently; each leg keeps its own outcome so
/// the caller can render whichever succeeded.
pub async fn fetch_details_bundle(
    api: &dyn CatalogApi,
    id: i64,
    region: Option<&str>,
) -> (
    ApiResult<Option<DetailsResponse>>,
    ApiResult<Option<ProvidersResponse>>,
) {
    tokio::join!(api.details(id), api.providers(id, region))
}

pub(crate) fn search_path(query: &str, page: u32) -> String {
    format!("/search?q={}&page={}", urlencoding::encode(query), page)
}

pub(crate) fn details_path(id: i64) -> String {
    format!("/details/{id}")
}

pub(crate) fn recommendations_path(id: i64, page: u32) -> String {
    format!("/recommend/{id}?page={page}")
}

pub(crate) fn providers_path(id: i64, region: Option<&str>) -> String {
    // An absent region is omitted outright, never sent as an empty value.
    match region {
        Some(region) => format!("/providers/{id}?region={}", urlencoding::encode(region)),
        None => format!("/providers/{id}"),
    }
}

pub(crate) fn mood_path(mood: &str, page: u32, region: Option<&str>) -> String {
    let mut path = format!("/recommend/mood?mood={}&page={}", urlencoding::encode(mood), page);
    if let Some(region) = region {
        path.push_str("&region=");
        path.push_str(&urlencoding::encode(region));
    }
    path
}

pub(crate) fn trending_path(window: TrendingWindow) -> String {
    format!("/trending?window={}", window.as_str())
}

pub(crate) fn popular_path(page: u32) -> String {
    format!("/popular?page={page}")
}
