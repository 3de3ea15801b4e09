use crate::cache::ScheduleSource;
use crate::espn::{ScoreboardResponse, StandingsResponse};
use crate::schedule::normalize_scoreboard;
use crate::standings::normalize_standings;
use crate::{Game, Standings};
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports/basketball/nba";
const ESPN_V2: &str = "https://site.api.espn.com/apis/v2/sports/basketball/nba";

/// NBA API client backed by ESPN's public endpoints.
#[derive(Debug, Clone)]
pub struct NbaApi {
    client: Client,
    timeout: Duration,
    site_base: String,
    standings_base: String,
}

impl Default for NbaApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("hypetracker/0.1 (terminal hype board)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            site_base: ESPN_SITE_V2.to_owned(),
            standings_base: ESPN_V2.to_owned(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Transport failure or non-success status from either upstream.
    UpstreamUnavailable(reqwest::Error, String),
    /// Payload or record does not have the expected shape.
    MalformedRecord(String),
    MissingCompetitor { event: String, side: &'static str },
    ConferenceNotFound(String),
    /// Stored cache value failed to deserialize.
    CacheCorrupt(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UpstreamUnavailable(e, url) => write!(f, "Upstream unavailable for {url}: {e}"),
            ApiError::MalformedRecord(msg) => write!(f, "Malformed record: {msg}"),
            ApiError::MissingCompetitor { event, side } => {
                write!(f, "Event {event} has no {side} competitor")
            }
            ApiError::ConferenceNotFound(name) => write!(f, "Conference not found: {name}"),
            ApiError::CacheCorrupt(msg) => write!(f, "Cache corrupt: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::UpstreamUnavailable(e, _) => Some(e),
            _ => None,
        }
    }
}

impl NbaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at alternate hosts (scoreboard base, standings base).
    pub fn with_base_urls(site_base: impl Into<String>, standings_base: impl Into<String>) -> Self {
        Self {
            site_base: site_base.into(),
            standings_base: standings_base.into(),
            ..Self::default()
        }
    }

    /// Fetch and normalize the scoreboard for one calendar day.
    /// Games come back unscored, in upstream order.
    pub async fn fetch_scoreboard(&self, day: NaiveDate) -> ApiResult<Vec<Game>> {
        let url = format!("{}/scoreboard?dates={}", self.site_base, day.format("%Y%m%d"));
        let raw: ScoreboardResponse = self.get(&url).await?;
        let games = normalize_scoreboard(raw);
        debug!("scoreboard for {day}: {} games", games.len());
        Ok(games)
    }

    /// Fetch and normalize current conference standings.
    pub async fn fetch_standings(&self) -> ApiResult<Standings> {
        let url = format!("{}/standings", self.standings_base);
        let raw: StandingsResponse = self.get(&url).await?;
        normalize_standings(raw)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::UpstreamUnavailable(e, url.to_owned()))?;

        let response = response
            .error_for_status()
            .map_err(|e| ApiError::UpstreamUnavailable(e, url.to_owned()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::MalformedRecord(format!("{url}: {e}")))
    }
}

impl ScheduleSource for NbaApi {
    async fn fetch_games(&self, day: NaiveDate) -> ApiResult<Vec<Game>> {
        self.fetch_scoreboard(day).await
    }
}
