// Configuration module entry point
// Loads layered configuration and holds runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    AccessLogFormat, Config, HttpConfig, LogLevel, LoggingConfig, PerformanceConfig,
    RoutesConfig, ServerConfig, DEFAULT_GREETING, DEFAULT_HEALTH_PATH,
};
use types::{DEFAULT_HOST, DEFAULT_MAX_BODY_SIZE, DEFAULT_PORT, DEFAULT_SERVER_NAME};

/// Environment variable prefix, e.g. `HELLO_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "HELLO";

impl Config {
    /// Load configuration from the default `config.toml` (optional)
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (extension optional)
    ///
    /// Sources, lowest priority first: built-in defaults, the file, then
    /// `HELLO_`-prefixed environment variables using `__` between sections.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", DEFAULT_SERVER_NAME)?
            .set_default("http.enable_cors", false)?
            .set_default(
                "http.max_body_size",
                i64::try_from(DEFAULT_MAX_BODY_SIZE).unwrap_or(i64::MAX),
            )?
            .set_default("routes.greeting", DEFAULT_GREETING)?
            .set_default("routes.health_enabled", true)?
            .set_default("routes.health_path", DEFAULT_HEALTH_PATH)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_serve_greeting_and_health() {
        let cfg = Config::default();
        assert_eq!(cfg.routes.greeting, "Hello, World!");
        assert_eq!(cfg.routes.health_path, "/health");
        assert!(cfg.routes.health_enabled);
        assert_eq!(cfg.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let cfg = Config::load_from("definitely/not/a/config/file").unwrap();
        assert_eq!(cfg.routes.greeting, DEFAULT_GREETING);
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.logging.access_log_format, AccessLogFormat::Combined);
        assert!(cfg.server.workers.is_none());
    }

    #[test]
    fn test_load_from_toml_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("hello_server_cfg_{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(
                file,
                "[server]\nport = 9090\nworkers = 2\n\n[logging]\nlevel = \"debug\"\naccess_log_format = \"json\"\n\n[routes]\nhealth_path = \"/healthz\""
            )
            .unwrap();
        }

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.logging.level, LogLevel::Debug);
        assert_eq!(cfg.logging.access_log_format, AccessLogFormat::Json);
        assert_eq!(cfg.routes.health_path, "/healthz");
        assert_eq!(cfg.routes.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let path = std::env::temp_dir().join(format!("hello_server_env_{}.toml", std::process::id()));
        std::fs::write(&path, "[performance]\nwrite_timeout = 40\n").unwrap();

        let key = format!("{ENV_PREFIX}_PERFORMANCE__WRITE_TIMEOUT");
        let from_file = Config::load_from(path.to_str().unwrap()).unwrap();
        std::env::set_var(&key, "45");
        let from_env = Config::load_from(path.to_str().unwrap());
        let env_only = Config::load_from("definitely/not/a/config/file");
        std::env::remove_var(&key);
        std::fs::remove_file(&path).ok();

        assert_eq!(from_file.performance.write_timeout, 40);
        assert_eq!(from_env.unwrap().performance.write_timeout, 45);
        assert_eq!(env_only.unwrap().performance.write_timeout, 45);
    }

    #[test]
    fn test_connection_timeout_is_larger_of_read_and_write() {
        let mut cfg = Config::default();
        cfg.performance.read_timeout = 10;
        cfg.performance.write_timeout = 25;
        assert_eq!(cfg.performance.connection_timeout().as_secs(), 25);

        cfg.performance.keep_alive_timeout = 0;
        assert!(!cfg.performance.keep_alive_enabled());
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::default();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 5000);

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
