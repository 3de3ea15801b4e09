use log::LevelFilter;
use nba_api::hype::HypePolicy;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub hype_policy: HypePolicy,
}

impl AppSettings {
    /// `HYPETRACKER_LOG` sets the log level; `HYPETRACKER_LEGACY_HYPE=1` scores
    /// without smoothing.
    pub fn load() -> Self {
        Self::from_vars(
            std::env::var("HYPETRACKER_LOG").ok().as_deref(),
            std::env::var("HYPETRACKER_LEGACY_HYPE").ok().as_deref(),
        )
    }

    fn from_vars(log_level: Option<&str>, legacy_hype: Option<&str>) -> Self {
        let hype_policy = match legacy_hype.map(str::trim) {
            Some("1" | "true" | "yes") => HypePolicy::LEGACY_UNSMOOTHED,
            _ => HypePolicy::SMOOTHED,
        };
        Self {
            full_screen: false,
            log_level: log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()),
            hype_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_smoothed_policy_and_no_level() {
        let settings = AppSettings::from_vars(None, None);
        assert_eq!(settings.hype_policy, HypePolicy::SMOOTHED);
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn legacy_flag_selects_unsmoothed() {
        let settings = AppSettings::from_vars(Some("debug"), Some("1"));
        assert_eq!(settings.hype_policy, HypePolicy::LEGACY_UNSMOOTHED);
        assert_eq!(settings.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn junk_values_are_ignored() {
        let settings = AppSettings::from_vars(Some("loud"), Some("maybe"));
        assert_eq!(settings.hype_policy, HypePolicy::SMOOTHED);
        assert_eq!(settings.log_level, None);
    }
}
