//! Day-scoped schedule cache.
//!
//! One key holds a serialized [`CacheEnvelope`]; the calendar day lives inside
//! the value. An envelope is reused only on the day it was written.

use crate::Game;
use crate::client::{ApiError, ApiResult};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::{fs, io};

pub const CACHE_KEY: &str = "nba-games-cache";
const CACHE_DIR: &str = "hypetracker";

/// String-valued key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$XDG_CACHE_HOME/hypetracker`, else `~/.cache/hypetracker`, else `./hypetracker`.
    pub fn default_location() -> Self {
        if let Ok(base) = std::env::var("XDG_CACHE_HOME")
            && !base.trim().is_empty()
        {
            return Self::new(PathBuf::from(base).join(CACHE_DIR));
        }
        if let Ok(home) = std::env::var("HOME")
            && !home.trim().is_empty()
        {
            return Self::new(PathBuf::from(home).join(".cache").join(CACHE_DIR));
        }
        Self::new(CACHE_DIR)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEnvelope {
    pub games: Vec<Game>,
    /// Calendar day, "YYYY-MM-DD".
    pub date: String,
}

impl CacheEnvelope {
    pub fn new(games: Vec<Game>, day: NaiveDate) -> Self {
        Self { games, date: day_key(day) }
    }

    pub fn is_valid_for(&self, today: NaiveDate) -> bool {
        self.date == day_key(today)
    }
}

pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn decode_envelope(raw: &str) -> ApiResult<CacheEnvelope> {
    serde_json::from_str(raw).map_err(|e| ApiError::CacheCorrupt(e.to_string()))
}

/// Anything that can produce a day's normalized, unscored schedule.
pub trait ScheduleSource {
    fn fetch_games(&self, day: NaiveDate) -> impl Future<Output = ApiResult<Vec<Game>>> + Send;
}

pub struct ScheduleCache<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ScheduleCache<S> {
    pub fn new(store: S) -> Self {
        Self { store, key: CACHE_KEY.to_owned() }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    /// Cached games for `today`, if a same-day envelope exists.
    /// A corrupt value counts as a miss.
    pub fn lookup(&self, today: NaiveDate) -> Option<Vec<Game>> {
        let raw = self.store.get(&self.key)?;
        match decode_envelope(&raw) {
            Ok(envelope) if envelope.is_valid_for(today) => Some(envelope.games),
            Ok(envelope) => {
                debug!("cached schedule is from {}, not {today}", envelope.date);
                None
            }
            Err(e) => {
                warn!("{e}; ignoring cached schedule");
                None
            }
        }
    }

    /// Replace the stored envelope with `games` for `today`.
    pub fn save(&mut self, today: NaiveDate, games: &[Game]) -> io::Result<()> {
        let envelope = CacheEnvelope::new(games.to_vec(), today);
        let payload = serde_json::to_string(&envelope).map_err(io::Error::other)?;
        self.store.set(&self.key, &payload)
    }

    /// Same-day cache hit, or a fresh fetch that overwrites the cache.
    /// Failing to write the cache does not fail the load.
    pub async fn load_or_fetch<F: ScheduleSource>(
        &mut self,
        source: &F,
        today: NaiveDate,
    ) -> ApiResult<Vec<Game>> {
        if let Some(games) = self.lookup(today) {
            debug!("using cached schedule for {today}");
            return Ok(games);
        }

        self.refresh(source, today).await
    }

    /// Fetch regardless of what is cached and overwrite the envelope.
    pub async fn refresh<F: ScheduleSource>(
        &mut self,
        source: &F,
        today: NaiveDate,
    ) -> ApiResult<Vec<Game>> {
        debug!("fetching fresh schedule for {today}");
        let games = source.fetch_games(today).await?;
        if let Err(e) = self.save(today, &games) {
            warn!("failed to write schedule cache: {e}");
        }
        Ok(games)
    }
}
