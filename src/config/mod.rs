use serde::Deserialize;
use std::env;
use std::str::FromStr;

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки базы данных (SQLite файл)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Config {
            app: AppConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse_var(&lookup, "PORT", 5000)?,
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "seat_planner=debug,tower_http=debug"),
            },
            database: DatabaseConfig {
                url: normalize_database_url(&var("DATABASE_URL", "sqlite://seating.db")),
                pool_size: parse_var(&lookup, "DB_POOL_SIZE", 5)?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

/// Turns a bare file path into a `sqlite://` URL; URLs pass through.
pub fn normalize_database_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with("sqlite:") {
        raw.to_string()
    } else {
        format!("sqlite://{raw}")
    }
}
