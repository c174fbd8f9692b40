pub mod game;

use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use tracing::debug;

use crate::{config::AppConfig, dao::game_store::GameStore};

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state storing the configuration, the storage backend,
/// and the cached aggregate statistic.
pub struct AppState {
    config: AppConfig,
    store: Arc<dyn GameStore>,
    /// Cached "average moves remaining" line, owned here rather than living
    /// in ambient global state; `None` until the first recomputation.
    average_attempts: RwLock<Option<String>>,
    stats_trigger: mpsc::UnboundedSender<()>,
}

impl AppState {
    /// Construct the shared state wrapped in an [`Arc`] so it can be cloned
    /// cheaply, together with the receiving end of the statistics trigger
    /// channel that the recompute worker consumes.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn GameStore>,
    ) -> (SharedState, mpsc::UnboundedReceiver<()>) {
        let (stats_trigger, stats_rx) = mpsc::unbounded_channel();
        let state = Arc::new(Self {
            config,
            store,
            average_attempts: RwLock::new(None),
            stats_trigger,
        });
        (state, stats_rx)
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle to the storage backend.
    pub fn store(&self) -> Arc<dyn GameStore> {
        self.store.clone()
    }

    /// Cached average-attempts line, if it has ever been computed.
    pub async fn average_attempts(&self) -> Option<String> {
        self.average_attempts.read().await.clone()
    }

    /// Replace the cached average-attempts line.
    pub async fn set_average_attempts(&self, value: String) {
        let mut slot = self.average_attempts.write().await;
        *slot = Some(value);
    }

    /// Ask the statistics worker for a recomputation, without waiting for it.
    ///
    /// Game creation does not depend on the cache being fresh, so a closed
    /// channel (worker gone during shutdown) is not an error.
    pub fn schedule_stats_refresh(&self) {
        if self.stats_trigger.send(()).is_err() {
            debug!("statistics worker is gone; skipping cache refresh");
        }
    }
}
