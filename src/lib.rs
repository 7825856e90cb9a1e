pub mod api;
pub mod error;
pub mod http;
pub mod img;
pub mod models;
pub mod ratings;
pub mod routes;

pub use api::{fetch_details_bundle, CatalogApi};
pub use error::{parse_api_error, ApiResult, ErrorEnvelope};
pub use http::ApiClient;
pub use ratings::{RatingStore, UserRating};
pub use routes::Route;
