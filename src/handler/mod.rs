//! Request handler module
//!
//! Routing dispatch plus the two application routes: the root greeting and
//! the health check.

pub mod greeting;
pub mod health;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
