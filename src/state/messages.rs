use crate::state::network::LoadingState;
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use nba_api::{Game, Standings};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    /// Today's ranked games. `force` skips the same-day cache.
    LoadGames { force: bool },
    LoadStandings,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// Games already scored and sorted hottest first.
    GamesLoaded { day: NaiveDate, games: Vec<Game> },
    StandingsLoaded { standings: Standings },
    GamesFailed { message: String },
    StandingsFailed { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
