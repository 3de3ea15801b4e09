use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::profile::Profile;
use chrono::NaiveDate;
use log::{info, warn};
use nba_api::{Game, Standings};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Games,
    Standings,
    Profile,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::new(Profile::load()),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_games_loaded(&mut self, day: NaiveDate, games: Vec<Game>) {
        info!("{} games on the board for {day}", games.len());
        self.state.games.load(day, games);
    }

    pub fn on_games_failed(&mut self, message: String) {
        self.state.games.error = Some(message);
    }

    pub fn on_standings_loaded(&mut self, standings: Standings) {
        self.state.standings.error = None;
        self.state.standings.standings = Some(standings);
        let max = self.team_names().len().saturating_sub(1);
        self.state.profile.cursor = self.state.profile.cursor.min(max);
    }

    pub fn on_standings_failed(&mut self, message: String) {
        self.state.standings.error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        if next == MenuItem::Profile {
            self.focus_favorite_team();
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Games board
    // -----------------------------------------------------------------------

    pub fn game_down(&mut self) {
        self.state.games.select_next();
    }

    pub fn game_up(&mut self) {
        self.state.games.select_prev();
    }

    // -----------------------------------------------------------------------
    // Profile editor
    // -----------------------------------------------------------------------

    /// Team names offered by the favorite-team picker, alphabetized.
    pub fn team_names(&self) -> Vec<String> {
        self.state
            .standings
            .standings
            .as_ref()
            .map(Standings::team_names)
            .unwrap_or_default()
    }

    pub fn profile_cursor_down(&mut self) {
        let max = self.team_names().len().saturating_sub(1);
        if self.state.profile.cursor < max {
            self.state.profile.cursor += 1;
        }
    }

    pub fn profile_cursor_up(&mut self) {
        self.state.profile.cursor = self.state.profile.cursor.saturating_sub(1);
    }

    pub fn cycle_timezone(&mut self, forward: bool) {
        self.state.profile.profile.cycle_timezone(forward);
        self.persist_profile();
    }

    pub fn select_favorite_team(&mut self) {
        let Some(team) = self.team_names().into_iter().nth(self.state.profile.cursor) else {
            self.state.profile.status = Some("Standings not loaded yet".to_string());
            return;
        };
        self.state.profile.profile.favorite_team = Some(team);
        self.persist_profile();
    }

    pub fn clear_favorite_team(&mut self) {
        self.state.profile.profile.favorite_team = None;
        self.persist_profile();
    }

    fn focus_favorite_team(&mut self) {
        let Some(favorite) = self.state.profile.profile.favorite_team.clone() else {
            return;
        };
        if let Some(index) = self.team_names().iter().position(|n| *n == favorite) {
            self.state.profile.cursor = index;
        }
    }

    fn persist_profile(&mut self) {
        self.state.profile.status = match self.state.profile.profile.save() {
            Ok(()) => Some("Saved".to_string()),
            Err(e) => {
                warn!("{e}");
                Some(e)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_api::{Team, TeamRow};

    fn app() -> App {
        App { settings: AppSettings::default(), state: AppState::new(Profile::default()) }
    }

    fn standings() -> Standings {
        let row = |name: &str| TeamRow { name: name.into(), wins: 10, losses: 10 };
        Standings {
            east: vec![row("Miami Heat"), row("Boston Celtics")],
            west: vec![row("Denver Nuggets")],
        }
    }

    #[test]
    fn help_returns_to_previous_tab() {
        let mut app = app();
        app.update_tab(MenuItem::Standings);
        app.update_tab(MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Standings);

        // Esc outside help is a no-op.
        app.exit_help();
        assert_eq!(app.state.active_tab, MenuItem::Standings);
    }

    #[test]
    fn loaded_games_clear_previous_error() {
        let mut app = app();
        app.on_games_failed("Upstream unavailable".into());
        let day = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        let game = Game {
            id: 1,
            home: Team::new("Boston Celtics", 1, 0),
            away: Team::new("Miami Heat", 0, 1),
            ..Default::default()
        };
        app.on_games_loaded(day, vec![game]);
        assert!(app.state.games.error.is_none());
        assert_eq!(app.state.games.day, Some(day));
        assert_eq!(app.state.games.selected_game().map(|g| g.id), Some(1));
    }

    #[test]
    fn standings_load_keeps_games_error() {
        let mut app = app();
        app.on_games_failed("Malformed record: scoreboard not json".into());
        app.on_standings_loaded(standings());

        assert!(app.state.games.games.is_none());
        assert_eq!(
            app.state.games.error.as_deref(),
            Some("Malformed record: scoreboard not json")
        );
        assert!(app.state.standings.error.is_none());
    }

    #[test]
    fn standings_failure_stays_off_the_games_board() {
        let mut app = app();
        let day = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
        app.on_games_loaded(day, vec![]);
        app.on_standings_failed("Conference not found: Western Conference".into());

        assert!(app.state.games.error.is_none());
        assert_eq!(
            app.state.standings.error.as_deref(),
            Some("Conference not found: Western Conference")
        );

        // A later games failure does not clobber the standings message either.
        app.on_games_failed("Upstream unavailable".into());
        app.on_games_loaded(day, vec![]);
        assert!(app.state.games.error.is_none());
        assert!(app.state.standings.error.is_some());
    }

    #[test]
    fn team_picker_is_alphabetized_and_clamped() {
        let mut app = app();
        assert!(app.team_names().is_empty());
        app.profile_cursor_down();
        assert_eq!(app.state.profile.cursor, 0);

        app.on_standings_loaded(standings());
        assert_eq!(
            app.team_names(),
            vec!["Boston Celtics", "Denver Nuggets", "Miami Heat"]
        );
        for _ in 0..5 {
            app.profile_cursor_down();
        }
        assert_eq!(app.state.profile.cursor, 2);
        app.profile_cursor_up();
        assert_eq!(app.state.profile.cursor, 1);
    }

    #[test]
    fn opening_profile_focuses_current_favorite() {
        let mut app = app();
        app.on_standings_loaded(standings());
        app.state.profile.profile.favorite_team = Some("Miami Heat".into());
        app.update_tab(MenuItem::Profile);
        assert_eq!(app.state.profile.cursor, 2);
    }
}
