//! ESPN API raw wire types, deserialized straight from the JSON responses.
//! These map to our clean domain types in schedule.rs and standings.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub date: Option<String>, // ISO 8601, often minute precision: "2025-01-15T00:30Z"
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub records: Option<Vec<EspnRecord>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnRecord {
    #[serde(rename = "type")]
    pub record_type: Option<String>, // "total" | "home" | "road"
    pub summary: Option<String>,     // "50-20"
}

// ---------------------------------------------------------------------------
// Standings  (v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    pub children: Option<Vec<EspnGroup>>,
}

/// A conference grouping, e.g. "Eastern Conference".
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnGroup {
    pub name: Option<String>,
    pub standings: Option<EspnStandings>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandings {
    pub entries: Option<Vec<EspnStandingsEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandingsEntry {
    pub team: Option<EspnTeam>,
    pub stats: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStat {
    pub name: Option<String>,
    pub value: Option<f64>,
}

impl EspnStandingsEntry {
    /// Value of the named statistic, if present.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats
            .iter()
            .flatten()
            .find(|s| s.name.as_deref() == Some(name))
            .and_then(|s| s.value)
    }
}
