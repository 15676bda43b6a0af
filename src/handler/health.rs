//! Health check endpoint

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

use crate::config::AppState;
use crate::http;

pub const HEALTHY: &str = "healthy";

/// Liveness report returned by the health route
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

impl HealthReport {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            status: HEALTHY,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: state.uptime().as_secs(),
        }
    }
}

pub fn serve_health(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    http::build_json_response(&HealthReport::from_state(state), is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_report_is_healthy() {
        let state = AppState::new(Config::default());
        let report = HealthReport::from_state(&state);
        assert_eq!(report.status, "healthy");
        assert_eq!(report.service, "hello_server");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["uptime_seconds"].is_u64());
    }
}
