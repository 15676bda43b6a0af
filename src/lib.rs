//! Minimal HTTP service answering a greeting at `/` and a health check at
//! `/health`, built on Tokio and hyper.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
