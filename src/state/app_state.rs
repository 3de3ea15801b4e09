use crate::app::MenuItem;
use crate::state::profile::Profile;
use chrono::{Local, NaiveDate};
use nba_api::{Conference, Game, Standings, TeamRow};

// ---------------------------------------------------------------------------
// Games board state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct GamesState {
    /// Ranked hottest first. `None` until the first load completes.
    pub games: Option<Vec<Game>>,
    pub day: Option<NaiveDate>,
    pub selected: usize,
    pub last_loaded_at: Option<String>,
    /// Message from the most recent failed games load.
    pub error: Option<String>,
}

impl GamesState {
    pub fn load(&mut self, day: NaiveDate, games: Vec<Game>) {
        let previous = self.selected_game().map(|g| g.id);
        self.selected = previous
            .and_then(|id| games.iter().position(|g| g.id == id))
            .unwrap_or(0);
        self.games = Some(games);
        self.day = Some(day);
        self.error = None;
        self.last_loaded_at = Some(Local::now().format("%H:%M").to_string());
    }

    pub fn selected_game(&self) -> Option<&Game> {
        self.games.as_ref()?.get(self.selected)
    }

    pub fn select_next(&mut self) {
        let max = self.games.as_ref().map_or(0, |g| g.len().saturating_sub(1));
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Standings state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct StandingsState {
    pub standings: Option<Standings>,
    pub error: Option<String>,
}

impl StandingsState {
    /// Rows in on-screen order. The normalizer sorts by rank descending, so the
    /// board shows them reversed.
    pub fn display_rows(&self, conference: Conference) -> Vec<&TeamRow> {
        self.standings
            .as_ref()
            .map(|s| s.conference(conference).iter().rev().collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Profile editor state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ProfileState {
    pub profile: Profile,
    /// Cursor into the alphabetized team list.
    pub cursor: usize,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub games: GamesState,
    pub standings: StandingsState,
    pub profile: ProfileState,
}

impl AppState {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: ProfileState { profile, ..Default::default() },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_api::Team;

    fn game(id: u64) -> Game {
        Game {
            id,
            home: Team::new("Home", 1, 1),
            away: Team::new("Away", 1, 1),
            ..Default::default()
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
    }

    #[test]
    fn reload_keeps_selection_on_same_game() {
        let mut state = GamesState::default();
        state.load(day(), vec![game(1), game(2), game(3)]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_game().map(|g| g.id), Some(3));

        state.load(day(), vec![game(3), game(1)]);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_game().map(|g| g.id), Some(3));
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = GamesState::default();
        state.select_next();
        assert_eq!(state.selected, 0);
        state.load(day(), vec![game(1), game(2)]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn standings_display_reverses_normalized_order() {
        let row = |name: &str| TeamRow { name: name.into(), wins: 0, losses: 0 };
        let state = StandingsState {
            standings: Some(Standings {
                east: vec![row("Wizards"), row("Knicks"), row("Celtics")],
                west: vec![],
            }),
            error: None,
        };
        let names: Vec<&str> = state
            .display_rows(Conference::East)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Celtics", "Knicks", "Wizards"]);
        assert!(state.display_rows(Conference::West).is_empty());
    }
}
