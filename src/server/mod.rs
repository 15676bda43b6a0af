// Server module entry point
// Listener setup, connection serving and graceful shutdown

pub mod accept;
pub mod connection;
pub mod listener;
pub mod signal;

pub use accept::{drain, serve};
pub use listener::create_listener;
pub use signal::start_signal_handler;
