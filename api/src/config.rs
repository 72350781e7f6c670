use std::{env, path::PathBuf, time::Duration};

const DEFAULT_DATABASE_PATH: &str = "db.json";
const DEFAULT_BIND_ADDR: &str = "localhost:8081";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment (and `.env`, if any).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = var("DATABASE_PATH") {
            self.database_path = PathBuf::from(v);
        }
        if let Some(v) = var("BIND_ADDR") {
            self.bind_addr = v;
        }
        if let Some(secs) = var("REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(bytes) = var("MAX_BODY_BYTES").and_then(|v| v.parse().ok()) {
            self.max_body_bytes = bytes;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_the_stock_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.database_path, PathBuf::from("db.json"));
        assert_eq!(config.bind_addr, "localhost:8081");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_apply_and_bad_numbers_fall_back() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_PATH", "/var/lib/social/db.json"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("REQUEST_TIMEOUT_SECS", "five"),
            ("MAX_BODY_BYTES", "2048"),
        ]);
        let config =
            AppConfig::default().with_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_path, PathBuf::from("/var/lib/social/db.json"));
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_bytes, 2048);
    }
}
