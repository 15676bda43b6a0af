// Application state module
// Shared runtime state handed to every connection

use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    pub started_at: Instant,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,

    /// Open client connections, decremented when a connection task finishes
    pub active_connections: AtomicUsize,

    /// Wakes the accept loop when the process is asked to stop
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Self {
            config,
            started_at: Instant::now(),
            cached_access_log,
            active_connections: AtomicUsize::new(0),
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
