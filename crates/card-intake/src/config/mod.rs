use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use rust_decimal::Decimal;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the intake service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub validation: ValidationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = matches!(
            env::var("APP_LOG_ANSI")
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
                .as_str(),
            "1" | "true" | "yes"
        );

        let validation = ValidationConfig {
            min_age: optional_bound("APP_MIN_AGE")?,
            max_age: optional_bound("APP_MAX_AGE")?,
            min_income: optional_bound("APP_MIN_INCOME")?,
            max_income: optional_bound("APP_MAX_INCOME")?,
        };
        validation.check()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            validation,
        })
    }
}

fn optional_bound<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidBound { name }),
        _ => Ok(None),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Optional applicant bounds layered on top of the standard rule set.
///
/// Every bound is inclusive and unset by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub min_income: Option<Decimal>,
    pub max_income: Option<Decimal>,
}

impl ValidationConfig {
    fn check(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if min > max {
                return Err(ConfigError::InvertedBounds { field: "age" });
            }
        }
        if let (Some(min), Some(max)) = (self.min_income, self.max_income) {
            if min > max {
                return Err(ConfigError::InvertedBounds { field: "income" });
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidBound { name: &'static str },
    InvertedBounds { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidBound { name } => {
                write!(f, "{name} must be a number")
            }
            ConfigError::InvertedBounds { field } => {
                write!(f, "minimum {field} must not exceed maximum {field}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidBound { .. }
            | ConfigError::InvertedBounds { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_LOG_ANSI",
            "APP_MIN_AGE",
            "APP_MAX_AGE",
            "APP_MIN_INCOME",
            "APP_MAX_INCOME",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.ansi);
        assert_eq!(config.validation, ValidationConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_validation_bounds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MIN_AGE", "18");
        env::set_var("APP_MAX_INCOME", "5000000");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.validation.min_age, Some(18));
        assert_eq!(config.validation.max_age, None);
        assert_eq!(config.validation.max_income, Some(Decimal::from(5_000_000)));
        reset_env();
    }

    #[test]
    fn reads_fractional_income_bound() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MIN_INCOME", "25000.75");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.validation.min_income, Some(Decimal::new(2_500_075, 2)));
        reset_env();
    }

    #[test]
    fn rejects_unparseable_bound() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MIN_AGE", "eighteen");
        match AppConfig::load() {
            Err(ConfigError::InvalidBound { name }) => assert_eq!(name, "APP_MIN_AGE"),
            other => panic!("expected invalid bound, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn rejects_inverted_bounds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MIN_INCOME", "90000");
        env::set_var("APP_MAX_INCOME", "10000");
        match AppConfig::load() {
            Err(ConfigError::InvertedBounds { field }) => assert_eq!(field, "income"),
            other => panic!("expected inverted bounds, got {other:?}"),
        }
        reset_env();
    }
}
