use crate::models::Movie;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Storage key for the serialized rating map. A format change requires a new
/// key so legacy data is never misread.
pub const STORAGE_KEY: &str = "cine.user.ratings.v1";

/// One user rating plus the display snapshot captured when it was given,
/// so rated movies render without a re-fetch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserRating {
    pub id: i64,
    /// 1..=5; a record never exists with rating 0.
    pub rating: u8,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Millisecond wall-clock, strictly monotonic per store instance; used
    /// only for sort order.
    pub updated_at: i64,
}

struct Inner {
    /// `None` until the first access hydrates from disk; hydration happens
    /// once per store instance.
    map: Option<HashMap<i64, UserRating>>,
    last_stamp: i64,
}

/// The sole owner of user ratings. Views read and write only through these
/// operations; every mutation is persisted before it returns.
pub struct RatingStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl RatingStore {
    /// Store backed by `<dir>/cine.user.ratings.v1.json`.
    pub fn open_in(dir: impl AsRef<Path>) -> Self {
        Self::open(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            inner: Mutex::new(Inner {
                map: None,
                last_stamp: 0,
            }),
        }
    }

    /// Rate a movie. `value <= 0` removes the record; otherwise the value is
    /// clamped into 1..=5 and the snapshot and timestamp are refreshed.
    /// Movies without a positive id are ignored.
    pub fn rate(&self, movie: &Movie, value: i32) {
        if movie.id <= 0 {
            return;
        }
        let mut inner = self.lock();
        let stamp = next_stamp(&mut inner);
        let map = hydrated(&mut inner, &self.path);
        if value <= 0 {
            map.remove(&movie.id);
        } else {
            map.insert(
                movie.id,
                UserRating {
                    id: movie.id,
                    rating: value.clamp(1, 5) as u8,
                    title: Some(movie.title.clone()),
                    poster_path: movie.poster_path.clone(),
                    genre_ids: movie.genre_ids.clone(),
                    release_date: movie.release_date.clone(),
                    updated_at: stamp,
                },
            );
        }
        persist(&self.path, map);
    }

    /// Current rating for `id`, 0 when unrated. "Never rated" and
    /// "explicitly cleared" are indistinguishable by design.
    pub fn get(&self, id: i64) -> u8 {
        let mut inner = self.lock();
        hydrated(&mut inner, &self.path)
            .get(&id)
            .map(|r| r.rating)
            .unwrap_or(0)
    }

    /// All rating records, most recently updated first.
    pub fn list(&self) -> Vec<UserRating> {
        let mut inner = self.lock();
        let mut records: Vec<UserRating> =
            hydrated(&mut inner, &self.path).values().cloned().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        records
    }

    /// Empty the store and persist the empty state.
    pub fn clear_all(&self) {
        let mut inner = self.lock();
        let map = hydrated(&mut inner, &self.path);
        map.clear();
        persist(&self.path, map);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Strictly monotonic millisecond stamp: rapid successive ratings still sort
/// deterministically.
fn next_stamp(inner: &mut Inner) -> i64 {
    let stamp = Utc::now().timestamp_millis().max(inner.last_stamp + 1);
    inner.last_stamp = stamp;
    stamp
}

fn hydrated<'a>(inner: &'a mut Inner, path: &Path) -> &'a mut HashMap<i64, UserRating> {
    inner.map.get_or_insert_with(|| load(path))
}

/// Missing or corrupt persisted data is never an error: the store starts
/// empty and moves on.
fn load(path: &Path) -> HashMap<i64, UserRating> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("no persisted ratings at {:?} ({}), starting empty", path, e);
            return HashMap::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(e) => {
            warn!("persisted ratings at {:?} are unreadable ({}), starting empty", path, e);
            HashMap::new()
        }
    }
}

fn persist(path: &Path, map: &HashMap<i64, UserRating>) {
    let serialized = match serde_json::to_string(map) {
        Ok(s) => s,
        Err(e) => {
            warn!("failed to serialize ratings: {}", e);
            return;
        }
    };
    if let Err(e) = fs::write(path, serialized) {
        warn!("failed to persist ratings to {:?}: {}", path, e);
    }
}
