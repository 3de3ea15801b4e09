use crate::state::messages::{NetworkRequest, NetworkResponse};
use chrono::Local;
use log::{debug, error};
use nba_api::cache::{FileStore, ScheduleCache};
use nba_api::client::{ApiResult, NbaApi};
use nba_api::hype::{HypePolicy, rank_games};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    client: NbaApi,
    cache: ScheduleCache<FileStore>,
    policy: HypePolicy,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        policy: HypePolicy,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: NbaApi::new(),
            cache: ScheduleCache::new(FileStore::default_location()),
            policy,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match request {
                NetworkRequest::LoadGames { force } => {
                    self.handle_load_games(force).await.map_err(|err| {
                        NetworkResponse::GamesFailed { message: err.to_string() }
                    })
                }
                NetworkRequest::LoadStandings => {
                    self.handle_load_standings().await.map_err(|err| {
                        NetworkResponse::StandingsFailed { message: err.to_string() }
                    })
                }
            };

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let response = result.unwrap_or_else(|failed| failed);

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_games(&mut self, force: bool) -> ApiResult<NetworkResponse> {
        let day = Local::now().date_naive();
        debug!("loading games for {day} (force={force})");
        let games = if force {
            self.cache.refresh(&self.client, day).await?
        } else {
            self.cache.load_or_fetch(&self.client, day).await?
        };
        let games = rank_games(games, self.policy);
        Ok(NetworkResponse::GamesLoaded { day, games })
    }

    async fn handle_load_standings(&self) -> ApiResult<NetworkResponse> {
        debug!("loading standings");
        let standings = self.client.fetch_standings().await?;
        Ok(NetworkResponse::StandingsLoaded { standings })
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}
