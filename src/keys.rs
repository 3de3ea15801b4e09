use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let mut request = None;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Games),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Standings),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Profile),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Games board
        (MenuItem::Games, Char('j') | KeyCode::Down, _) => guard.game_down(),
        (MenuItem::Games, Char('k') | KeyCode::Up, _) => guard.game_up(),
        (MenuItem::Games, Char('r'), _) => request = Some(NetworkRequest::LoadGames { force: false }),
        (MenuItem::Games, Char('R'), _) => request = Some(NetworkRequest::LoadGames { force: true }),

        (MenuItem::Standings, Char('r' | 'R'), _) => request = Some(NetworkRequest::LoadStandings),

        // Profile editor
        (MenuItem::Profile, Char('l') | KeyCode::Right, _) => guard.cycle_timezone(true),
        (MenuItem::Profile, Char('h') | KeyCode::Left, _) => guard.cycle_timezone(false),
        (MenuItem::Profile, Char('j') | KeyCode::Down, _) => guard.profile_cursor_down(),
        (MenuItem::Profile, Char('k') | KeyCode::Up, _) => guard.profile_cursor_up(),
        (MenuItem::Profile, KeyCode::Enter, _) => guard.select_favorite_team(),
        (MenuItem::Profile, Char('x'), _) => guard.clear_favorite_team(),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }

    if let Some(request) = request {
        drop(guard);
        let _ = network_requests.send(request).await;
    }
}
