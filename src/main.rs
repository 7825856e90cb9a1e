//! Command-line probe for the cinescout client layer.
//! Usage:
//!   cargo run -- search <query> [page]
//!   cargo run -- details <id>
//!   cargo run -- recommend <id> [page]
//!   cargo run -- providers <id> [region]
//!   cargo run -- mood <mood> [page] [region]
//!   cargo run -- trending [day|week]
//!   cargo run -- popular [page]
//!   cargo run -- rate <id> <value> | ratings | clear-ratings | health
//! Reads CINESCOUT_API_BASE / CINESCOUT_DATA_DIR from the environment
//! (.env supported).

use anyhow::{anyhow, Context, Result};
use cinescout::models::{Movie, TrendingWindow};
use cinescout::{ApiClient, CatalogApi, RatingStore};
use dotenvy::dotenv;
use serde::Serialize;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_payload<T: Serialize>(payload: Option<T>) -> Result<()> {
    match payload {
        Some(value) => print_json(&value),
        None => {
            warn!("backend returned an empty payload");
            Ok(())
        }
    }
}

fn rating_store() -> RatingStore {
    let dir = env::var("CINESCOUT_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    RatingStore::open_in(dir)
}

fn parse_page(arg: Option<&String>) -> Result<u32> {
    match arg {
        Some(raw) => raw.parse().context("page must be an integer"),
        None => Ok(1),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = dotenv();
    init_tracing();
    if let Ok(path) = env_file {
        info!("Loaded environment from {:?}", path);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args
        .first()
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing command, see the header of src/main.rs for usage"))?;

    let api = ApiClient::from_env()?;

    match command {
        "health" => print_payload(api.health().await?),
        "search" => {
            let query = args.get(1).ok_or_else(|| anyhow!("search needs a query"))?;
            let page = parse_page(args.get(2))?;
            print_payload(api.search(query, page).await?)
        }
        "details" => {
            let id = parse_id(args.get(1))?;
            print_payload(api.details(id).await?)
        }
        "recommend" => {
            let id = parse_id(args.get(1))?;
            let page = parse_page(args.get(2))?;
            print_payload(api.recommendations(id, page).await?)
        }
        "providers" => {
            let id = parse_id(args.get(1))?;
            let region = args.get(2).map(String::as_str);
            print_payload(api.providers(id, region).await?)
        }
        "mood" => {
            let mood = args.get(1).ok_or_else(|| anyhow!("mood needs a mood name"))?;
            let page = parse_page(args.get(2))?;
            let region = args.get(3).map(String::as_str);
            print_payload(api.mood_recommendations(mood, page, region).await?)
        }
        "trending" => {
            let window = match args.get(1).map(String::as_str) {
                Some("week") => TrendingWindow::Week,
                Some("day") | None => TrendingWindow::Day,
                Some(other) => return Err(anyhow!("unknown trending window '{}'", other)),
            };
            print_payload(api.trending(window).await?)
        }
        "popular" => {
            let page = parse_page(args.get(1))?;
            print_payload(api.popular(page).await?)
        }
        "rate" => {
            let id = parse_id(args.get(1))?;
            let value: i32 = args
                .get(2)
                .ok_or_else(|| anyhow!("rate needs a value"))?
                .parse()
                .context("rating value must be an integer")?;
            let details = api
                .details(id)
                .await?
                .ok_or_else(|| anyhow!("no details returned for movie {}", id))?;
            let movie = Movie {
                id: details.movie.id,
                title: details.movie.title.clone(),
                year: details.movie.year.clone(),
                overview: details.movie.overview.clone(),
                poster_path: details.movie.poster_path.clone(),
                release_date: details.movie.release_date.clone(),
                genre_ids: details.movie.genres.iter().map(|g| g.id).collect(),
                vote_average: details.movie.vote_average,
            };
            let store = rating_store();
            store.rate(&movie, value);
            info!("movie {} now rated {}", id, store.get(id));
            Ok(())
        }
        "ratings" => print_json(&rating_store().list()),
        "clear-ratings" => {
            rating_store().clear_all();
            info!("cleared all ratings");
            Ok(())
        }
        other => Err(anyhow!("unknown command '{}'", other)),
    }
}

fn parse_id(arg: Option<&String>) -> Result<i64> {
    arg.ok_or_else(|| anyhow!("missing movie id"))?
        .parse()
        .context("movie id must be an integer")
}
