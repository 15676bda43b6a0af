// Accept loop module
// Hands incoming connections to the connection module until shutdown

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Accept connections until `state.shutdown` is notified.
///
/// Must run inside a `LocalSet`. Connections already accepted are served on
/// local tasks of that set; keep it running through `drain` after this returns,
/// or they are cancelled.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = Arc::clone(&state.shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_server_stop(state.active_connections.load(Ordering::SeqCst));
                return;
            }
        }
    }
}

/// Wait for in-flight connections to finish, at most the connection timeout.
///
/// Returns the number of connections still open when the wait ended.
pub async fn drain(state: &AppState) -> usize {
    let deadline = tokio::time::Instant::now() + state.config.performance.connection_timeout();

    loop {
        let remaining = state.active_connections.load(Ordering::SeqCst);
        if remaining == 0 {
            logger::log_info("All connections drained");
            return 0;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Drain timeout reached, aborting {remaining} connection(s)"
            ));
            return remaining;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
