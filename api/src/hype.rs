//! Hype scoring: a bounded 0-100 estimate of how watchable a matchup is,
//! derived from both teams' smoothed win fractions and how close they are.

use crate::{Game, Team};

/// Scoring policy. The only knob is the additive smoothing constant `K`
/// applied to each side's win fraction: `(wins + K) / (wins + losses + K)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HypePolicy {
    pub smoothing: u32,
}

impl HypePolicy {
    /// Production policy. Early-season records are pulled toward a full fraction
    /// instead of swinging to 0% or 100% after one game.
    pub const SMOOTHED: HypePolicy = HypePolicy { smoothing: 5 };

    /// Legacy scoring with no smoothing. A team with no games played has a
    /// fraction of 0.
    pub const LEGACY_UNSMOOTHED: HypePolicy = HypePolicy { smoothing: 0 };

    /// Score a matchup. Symmetric in `home`/`away`, total over all records.
    pub fn score(&self, home: &Team, away: &Team) -> u8 {
        let home_pct = self.win_fraction(home);
        let away_pct = self.win_fraction(away);

        let avg_quality = (home_pct + away_pct) / 2.0;
        let competitiveness = 1.0 - (home_pct - away_pct).abs();

        // sqrt curve: the inner sum spans [0, 100], so the result spans [0, 100]
        // with strong matchups bunched near the top.
        let raw = 10.0 * (avg_quality * 70.0 + competitiveness * 30.0).sqrt();
        raw.round().clamp(0.0, 100.0) as u8
    }

    pub fn win_fraction(&self, team: &Team) -> f64 {
        let k = f64::from(self.smoothing);
        let denominator = f64::from(team.wins) + f64::from(team.losses) + k;
        if denominator == 0.0 {
            return 0.0;
        }
        (f64::from(team.wins) + k) / denominator
    }
}

impl Default for HypePolicy {
    fn default() -> Self {
        Self::SMOOTHED
    }
}

/// Score with the default (smoothed) policy.
pub fn score(home: &Team, away: &Team) -> u8 {
    HypePolicy::default().score(home, away)
}

/// Annotate every game with its hype score and order them hottest first.
/// Ties keep their upstream order.
pub fn rank_games(mut games: Vec<Game>, policy: HypePolicy) -> Vec<Game> {
    for game in &mut games {
        game.hype = Some(policy.score(&game.home, &game.away));
    }
    games.sort_by(|a, b| b.hype.unwrap_or(0).cmp(&a.hype.unwrap_or(0)));
    games
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypeTier {
    MustWatch,
    High,
    Low,
}

impl HypeTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            HypeTier::MustWatch
        } else if score >= 50 {
            HypeTier::High
        } else {
            HypeTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HypeTier::MustWatch => "MUST WATCH",
            HypeTier::High => "HIGH HYPE",
            HypeTier::Low => "LOW HYPE",
        }
    }
}
