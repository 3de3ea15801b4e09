pub mod cache;
pub mod client;
pub mod espn;
pub mod hype;
pub mod schedule;
pub mod standings;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// One side of a matchup with its season record at fetch time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String, // "Boston Celtics"
    pub wins: u32,
    pub losses: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, wins: u32, losses: u32) -> Self {
        Self { name: name.into(), wins, losses }
    }

    /// "50-20"
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// A scheduled game, normalized from one scoreboard event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub home: Team,
    pub away: Team,
    /// Upstream ISO-8601 timestamp, kept verbatim for per-viewer formatting.
    pub date: String,
    /// Fallback display time in the default timezone, e.g. "7:30 PM EST".
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hype: Option<u8>,
}

impl Game {
    pub fn involves(&self, team_name: &str) -> bool {
        self.home.name == team_name || self.away.name == team_name
    }
}

/// A single standings line. Rows come out of the normalizer already sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRow {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    /// Exact group name used by the upstream standings document.
    pub fn upstream_name(&self) -> &'static str {
        match self {
            Conference::East => "Eastern Conference",
            Conference::West => "Western Conference",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Conference::East => "East",
            Conference::West => "West",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    pub east: Vec<TeamRow>,
    pub west: Vec<TeamRow>,
}

impl Standings {
    pub fn conference(&self, conference: Conference) -> &[TeamRow] {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    /// All team names across both conferences, alphabetized.
    pub fn team_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .east
            .iter()
            .chain(self.west.iter())
            .map(|row| row.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
