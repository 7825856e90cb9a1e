//! Image-CDN URL helpers. Pure string construction, no network calls.

use once_cell::sync::Lazy;
use std::env;

static IMG_BASE: Lazy<String> = Lazy::new(|| {
    env::var("CINESCOUT_IMG_BASE").unwrap_or_else(|_| "https://image.tmdb.org/t/p".to_string())
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    W185,
    #[default]
    W342,
    W500,
    W780,
    W1280,
}

impl PosterSize {
    fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::W1280 => "w1280",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropSize {
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    W45,
    #[default]
    W92,
}

impl LogoSize {
    fn as_str(&self) -> &'static str {
        match self {
            LogoSize::W45 => "w45",
            LogoSize::W92 => "w92",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSize {
    #[default]
    W185,
    W342,
    W500,
}

impl ProfileSize {
    fn as_str(&self) -> &'static str {
        match self {
            ProfileSize::W185 => "w185",
            ProfileSize::W342 => "w342",
            ProfileSize::W500 => "w500",
        }
    }
}

fn build(path: Option<&str>, size: &str) -> Option<String> {
    path.map(|p| format!("{}/{}{}", *IMG_BASE, size, p))
}

pub fn poster_url(path: Option<&str>, size: PosterSize) -> Option<String> {
    build(path, size.as_str())
}

pub fn backdrop_url(path: Option<&str>, size: BackdropSize) -> Option<String> {
    build(path, size.as_str())
}

pub fn provider_logo_url(path: Option<&str>, size: LogoSize) -> Option<String> {
    build(path, size.as_str())
}

pub fn profile_url(path: Option<&str>, size: ProfileSize) -> Option<String> {
    build(path, size.as_str())
}

/// Responsive pair for card posters: w185 at 1x, w342 at 2x.
pub fn poster_srcset(path: Option<&str>) -> Option<String> {
    let path = path?;
    let s1 = poster_url(Some(path), PosterSize::W185)?;
    let s2 = poster_url(Some(path), PosterSize::W342)?;
    Some(format!("{s1} 1x, {s2} 2x"))
}
