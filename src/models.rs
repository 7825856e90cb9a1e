use serde::{Deserialize, Serialize};

/// A catalog movie as returned in list responses (search, trending, mood...).
/// Server-sourced and read-only; the backend slims TMDb items down to these
/// fields, so everything beyond `id` and `title` is optional.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Richer movie payload served by `/details/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// One page of a TMDb-style list response. Pages are 1-based; each fetch is
/// independent and idempotent, so nothing here caches across pages.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Paged<T> {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Health {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetailsResponse {
    pub movie: MovieDetails,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Recommendations,
    Similar,
}

/// `/recommend/{id}` — a movie page plus which upstream list produced it
/// (the backend falls back from `recommendations` to `similar`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecommendationsResponse {
    pub source: RecommendationSource,
    #[serde(flatten)]
    pub movies: Paged<Movie>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderItem {
    pub provider_id: i64,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// `/providers/{id}` — availability grouped the way the backend groups it;
/// categories the region lacks come back as empty lists.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvidersResponse {
    pub id: i64,
    pub region: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<ProviderItem>,
    #[serde(default)]
    pub rent: Vec<ProviderItem>,
    #[serde(default)]
    pub buy: Vec<ProviderItem>,
    #[serde(default)]
    pub ads: Vec<ProviderItem>,
    #[serde(default)]
    pub free: Vec<ProviderItem>,
}

/// `/recommend/mood` — a movie page plus the canonical mood and region the
/// backend resolved.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MoodResponse {
    pub mood: String,
    pub region: String,
    #[serde(flatten)]
    pub movies: Paged<Movie>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingWindow {
    #[default]
    Day,
    Week,
}

impl TrendingWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}
