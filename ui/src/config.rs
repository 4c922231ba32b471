/*
 * Responsibility
 * - Load settings from the environment (UI_PORT, GREETING, SERVICE_REGISTRY, ...)
 * - Validate them up front (missing greeting or bad registry fails startup)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::middleware::http::request_deadline;
use crate::services::discovery::StaticResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_value(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

const DEFAULT_REGISTRY: &str = "fortune=http://localhost:8080";
// Anything longer is a misconfiguration, not a slow store.
pub const MAX_FORTUNE_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub greeting: String,
    // Logical name of the fortune store, looked up in `registry`
    pub fortune_service_name: String,
    pub registry: StaticResolver,
    // Upper bound for one call to the fortune store, fallback after that
    pub fortune_timeout: Duration,
}

impl Config {
    /// Deadline for a whole inbound request; always longer than `fortune_timeout`.
    pub fn request_deadline(&self) -> Duration {
        request_deadline(self.fortune_timeout)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `var` instead of the process
    /// environment.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = var("UI_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8081);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("UI_PORT"))?;

        let app_env = AppEnv::from_value(var("APP_ENV"));

        let greeting = var("GREETING").ok_or(ConfigError::Missing("GREETING"))?;

        let fortune_service_name =
            var("FORTUNE_SERVICE_NAME").unwrap_or_else(|| "fortune".to_string());

        let registry = var("SERVICE_REGISTRY")
            .unwrap_or_else(|| DEFAULT_REGISTRY.to_string())
            .parse::<StaticResolver>()
            .map_err(|_| ConfigError::Invalid("SERVICE_REGISTRY"))?;

        let fortune_timeout = match var("FORTUNE_TIMEOUT_MS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|ms| (1..=MAX_FORTUNE_TIMEOUT_MS).contains(ms))
                .map(Duration::from_millis)
                .ok_or(ConfigError::Invalid("FORTUNE_TIMEOUT_MS"))?,
            None => Duration::from_millis(1000),
        };

        Ok(Self {
            addr,
            app_env,
            greeting,
            fortune_service_name,
            registry,
            fortune_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::services::discovery::ServiceResolver;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn greeting_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("GREETING"));
    }

    #[test]
    fn defaults() {
        let config = load(&[("GREETING", "Hello from the UI!")]).unwrap();

        assert_eq!(config.addr.port(), 8081);
        assert_eq!(config.greeting, "Hello from the UI!");
        assert_eq!(config.fortune_service_name, "fortune");
        assert_eq!(config.fortune_timeout, Duration::from_millis(1000));
        assert_eq!(
            config.registry.resolve("fortune").unwrap().as_str(),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("GREETING", "hi"),
            ("UI_PORT", "9090"),
            ("FORTUNE_SERVICE_NAME", "fortunes-v2"),
            ("SERVICE_REGISTRY", "fortunes-v2=http://10.0.0.5:8080"),
            ("FORTUNE_TIMEOUT_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 9090);
        assert_eq!(config.fortune_timeout, Duration::from_millis(250));
        assert!(config.registry.resolve("fortunes-v2").is_ok());
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            load(&[("GREETING", "hi"), ("SERVICE_REGISTRY", "fortune")]).unwrap_err(),
            ConfigError::Invalid("SERVICE_REGISTRY")
        );
        assert_eq!(
            load(&[("GREETING", "hi"), ("FORTUNE_TIMEOUT_MS", "soon")]).unwrap_err(),
            ConfigError::Invalid("FORTUNE_TIMEOUT_MS")
        );
    }

    #[test]
    fn fortune_timeout_bounds() {
        for rejected in ["0", "120001"] {
            assert_eq!(
                load(&[("GREETING", "hi"), ("FORTUNE_TIMEOUT_MS", rejected)]).unwrap_err(),
                ConfigError::Invalid("FORTUNE_TIMEOUT_MS")
            );
        }

        let max = load(&[("GREETING", "hi"), ("FORTUNE_TIMEOUT_MS", "120000")]).unwrap();
        assert_eq!(max.fortune_timeout, Duration::from_secs(120));
    }

    #[test]
    fn request_deadline_outlasts_fortune_timeout() {
        // Around the 30 s middleware floor the deadline must keep growing with the timeout.
        for ms in ["1000", "29999", "30000", "35000", "120000"] {
            let config = load(&[("GREETING", "hi"), ("FORTUNE_TIMEOUT_MS", ms)]).unwrap();
            assert!(config.request_deadline() > config.fortune_timeout);
        }

        let at_floor = load(&[("GREETING", "hi"), ("FORTUNE_TIMEOUT_MS", "30000")]).unwrap();
        assert_eq!(at_floor.request_deadline(), Duration::from_secs(35));
    }
}
