use crate::state::messages::NetworkRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Standings are revalidated every five minutes. The games request rides along;
/// it is served from the day cache until local midnight rolls the date over.
pub const REFRESH_EVERY: Duration = Duration::from_secs(300);

pub struct PeriodicRefresher {
    network_requests: mpsc::Sender<NetworkRequest>,
}

impl PeriodicRefresher {
    pub fn new(network_requests: mpsc::Sender<NetworkRequest>) -> Self {
        Self { network_requests }
    }

    pub async fn run(self) {
        let mut refresh_interval = interval(REFRESH_EVERY);
        // Skip the immediate first tick so startup loading isn't double-triggered.
        refresh_interval.tick().await;

        loop {
            refresh_interval.tick().await;
            for request in [NetworkRequest::LoadGames { force: false }, NetworkRequest::LoadStandings] {
                if self.network_requests.send(request).await.is_err() {
                    return;
                }
            }
        }
    }
}
