use chrono_tz::Tz;
use log::warn;
use nba_api::schedule::DEFAULT_DISPLAY_TZ;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Timezones offered in the profile editor, with their display labels.
pub const TIMEZONES: [(&str, &str); 6] = [
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
    ("America/Anchorage", "Alaska Time (AKT)"),
    ("Pacific/Honolulu", "Hawaii Time (HT)"),
];

/// Viewer preferences used only for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub favorite_team: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self { favorite_team: None, timezone: default_timezone() }
    }
}

fn default_timezone() -> String {
    DEFAULT_DISPLAY_TZ.name().to_owned()
}

impl Profile {
    /// Profile file (if any), then `HYPETRACKER_FAVORITE_TEAM` / `HYPETRACKER_TIMEZONE`.
    pub fn load() -> Self {
        let mut profile = Self::load_or_default(&profile_path());
        profile.apply_overrides(
            std::env::var("HYPETRACKER_FAVORITE_TEAM").ok(),
            std::env::var("HYPETRACKER_TIMEZONE").ok(),
        );
        profile
    }

    /// A missing file is a fresh profile. An unreadable one is logged and replaced
    /// by defaults; the next save overwrites it.
    fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("{e} ({}); using default profile", path.display());
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("read profile failed: {e}"))?;
        serde_json::from_str(&content).map_err(|e| format!("parse profile failed: {e}"))
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&profile_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| format!("create dir failed: {e}"))?;
        }
        let payload = serde_json::to_string_pretty(self)
            .map_err(|e| format!("serialize profile failed: {e}"))?;
        std::fs::write(path, payload).map_err(|e| format!("write profile failed: {e}"))
    }

    fn apply_overrides(&mut self, favorite_team: Option<String>, timezone: Option<String>) {
        if let Some(team) = favorite_team.filter(|t| !t.trim().is_empty()) {
            self.favorite_team = Some(team.trim().to_owned());
        }
        if let Some(tz) = timezone.filter(|t| !t.trim().is_empty()) {
            self.timezone = tz.trim().to_owned();
        }
    }

    /// Parsed timezone; unknown names fall back to US Eastern.
    pub fn tz(&self) -> Tz {
        self.timezone.parse::<Tz>().unwrap_or(DEFAULT_DISPLAY_TZ)
    }

    pub fn timezone_label(&self) -> &str {
        TIMEZONES
            .iter()
            .find(|(name, _)| *name == self.timezone)
            .map(|(_, label)| *label)
            .unwrap_or(self.timezone.as_str())
    }

    pub fn cycle_timezone(&mut self, forward: bool) {
        let current = TIMEZONES.iter().position(|(name, _)| *name == self.timezone);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % TIMEZONES.len(),
            (Some(i), false) => (i + TIMEZONES.len() - 1) % TIMEZONES.len(),
            (None, _) => 0,
        };
        self.timezone = TIMEZONES[next].0.to_owned();
    }

    pub fn is_favorite(&self, team_name: &str) -> bool {
        self.favorite_team.as_deref() == Some(team_name)
    }
}

fn profile_path() -> PathBuf {
    if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME")
        && !config_dir.trim().is_empty()
    {
        return PathBuf::from(config_dir).join("hypetracker").join("profile.json");
    }
    if let Ok(home) = std::env::var("HOME")
        && !home.trim().is_empty()
    {
        return PathBuf::from(home)
            .join(".config")
            .join("hypetracker")
            .join("profile.json");
    }
    PathBuf::from("profile.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_timezone_falls_back_to_eastern() {
        let profile = Profile { favorite_team: None, timezone: "Mars/Olympus_Mons".into() };
        assert_eq!(profile.tz(), chrono_tz::America::New_York);
        assert_eq!(profile.timezone_label(), "Mars/Olympus_Mons");
    }

    #[test]
    fn cycle_timezone_wraps_both_ways() {
        let mut profile = Profile::default();
        assert_eq!(profile.timezone_label(), "Eastern Time (ET)");
        profile.cycle_timezone(false);
        assert_eq!(profile.timezone, "Pacific/Honolulu");
        profile.cycle_timezone(true);
        profile.cycle_timezone(true);
        assert_eq!(profile.tz(), chrono_tz::America::Chicago);
    }

    #[test]
    fn env_overrides_win_but_blank_values_are_ignored() {
        let mut profile = Profile {
            favorite_team: Some("Miami Heat".into()),
            timezone: "America/Denver".into(),
        };
        profile.apply_overrides(Some("  ".into()), Some("America/Los_Angeles".into()));
        assert!(profile.is_favorite("Miami Heat"));
        assert_eq!(profile.timezone, "America/Los_Angeles");

        profile.apply_overrides(Some("Boston Celtics".into()), None);
        assert!(profile.is_favorite("Boston Celtics"));
        assert!(!profile.is_favorite("Miami Heat"));
    }

    #[test]
    fn partial_profile_file_uses_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"favorite_team": null}"#).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn unreadable_profile_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("hypetracker-bad-profile-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");
        std::fs::write(&path, "{\"favorite_team\": 42").unwrap();

        assert!(Profile::load_from(&path).unwrap_err().starts_with("parse profile failed"));
        assert_eq!(Profile::load_or_default(&path), Profile::default());
        assert_eq!(Profile::load_or_default(&dir.join("missing.json")), Profile::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir()
            .join(format!("hypetracker-profile-{}", std::process::id()))
            .join("profile.json");
        let profile = Profile {
            favorite_team: Some("Denver Nuggets".into()),
            timezone: "America/Denver".into(),
        };
        profile.save_to(&path).unwrap();
        assert_eq!(Profile::load_from(&path).unwrap(), profile);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
