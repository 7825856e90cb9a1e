use async_trait::async_trait;
use cinescout::models::{
    CastMember, DetailsResponse, Health, MoodResponse, Movie, MovieDetails, Paged,
    ProviderItem, ProvidersResponse, RecommendationsResponse, TrendingWindow,
};
use cinescout::{fetch_details_bundle, ApiResult, CatalogApi, ErrorEnvelope};
use std::sync::atomic::{AtomicUsize, Ordering};

struct FakeCatalog {
    details: ApiResult<Option<DetailsResponse>>,
    providers: ApiResult<Option<ProvidersResponse>>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    fn new(
        details: ApiResult<Option<DetailsResponse>>,
        providers: ApiResult<Option<ProvidersResponse>>,
    ) -> Self {
        Self {
            details,
            providers,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn health(&self) -> ApiResult<Option<Health>> {
        Ok(Some(Health {
            status: "up".to_string(),
        }))
    }

    async fn search(&self, _query: &str, _page: u32) -> ApiResult<Option<Paged<Movie>>> {
        Ok(None)
    }

    async fn details(&self, _id: i64) -> ApiResult<Option<DetailsResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.details.clone()
    }

    async fn recommendations(
        &self,
        _id: i64,
        _page: u32,
    ) -> ApiResult<Option<RecommendationsResponse>> {
        Ok(None)
    }

    async fn providers(
        &self,
        _id: i64,
        _region: Option<&str>,
    ) -> ApiResult<Option<ProvidersResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.providers.clone()
    }

    async fn mood_recommendations(
        &self,
        _mood: &str,
        _page: u32,
        _region: Option<&str>,
    ) -> ApiResult<Option<MoodResponse>> {
        Ok(None)
    }

    async fn trending(&self, _window: TrendingWindow) -> ApiResult<Option<Paged<Movie>>> {
        Ok(None)
    }

    async fn popular(&self, _page: u32) -> ApiResult<Option<Paged<Movie>>> {
        Ok(None)
    }
}

fn inception_details() -> DetailsResponse {
    DetailsResponse {
        movie: MovieDetails {
            id: 27205,
            title: "Inception".to_string(),
            year: Some("2010".to_string()),
            overview: Some("A thief who steals corporate secrets...".to_string()),
            poster_path: Some("/ink.jpg".to_string()),
            backdrop_path: None,
            release_date: Some("2010-07-15".to_string()),
            runtime: Some(148.0),
            vote_average: Some(8.4),
            genres: vec![],
        },
        cast: vec![CastMember {
            id: 6193,
            name: "Leonardo DiCaprio".to_string(),
            character: Some("Cobb".to_string()),
            profile_path: None,
        }],
    }
}

fn us_providers() -> ProvidersResponse {
    ProvidersResponse {
        id: 27205,
        region: "US".to_string(),
        link: Some("https://www.themoviedb.org/movie/27205/watch".to_string()),
        flatrate: vec![ProviderItem {
            provider_id: 8,
            provider_name: "Netflix".to_string(),
            logo_path: Some("/n.jpg".to_string()),
            link: None,
        }],
        rent: vec![],
        buy: vec![],
        ads: vec![],
        free: vec![],
    }
}

#[tokio::test]
async fn bundle_returns_both_legs_when_both_succeed() {
    let fake = FakeCatalog::new(Ok(Some(inception_details())), Ok(Some(us_providers())));
    let (details, providers) = fetch_details_bundle(&fake, 27205, Some("US")).await;

    let details = details.expect("details ok").expect("details payload");
    assert_eq!(details.movie.title, "Inception");
    assert_eq!(details.cast.len(), 1);

    let providers = providers.expect("providers ok").expect("providers payload");
    assert_eq!(providers.flatrate[0].provider_name, "Netflix");

    assert_eq!(fake.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn one_failing_leg_does_not_poison_the_other() {
    let envelope = ErrorEnvelope::new("bad_gateway", "TMDb error");
    let fake = FakeCatalog::new(Ok(Some(inception_details())), Err(envelope.clone()));
    let (details, providers) = fetch_details_bundle(&fake, 27205, None).await;

    assert!(details.is_ok());
    // The failure reaching the view is the structured envelope, nothing rawer.
    let err = providers.expect_err("providers should fail");
    assert_eq!(err.code, "bad_gateway");
    assert_eq!(err.message, "TMDb error");
}

#[tokio::test]
async fn absent_payloads_flow_through_as_none() {
    let fake = FakeCatalog::new(Ok(None), Ok(None));
    let (details, providers) = fetch_details_bundle(&fake, 27205, None).await;
    assert!(details.expect("details ok").is_none());
    assert!(providers.expect("providers ok").is_none());
}
