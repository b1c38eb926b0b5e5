use std::env::var;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required env param {0}")]
    Missing(&'static str),
    #[error("An error occured while parsing {name} env param: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Ok(Config {
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            database: DatabaseConfig {
                host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
                user: get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?,
                password: get("DB_PASSWORD").unwrap_or_default(),
                name: get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
                max_connections: parse_or(
                    "DB_MAX_CONNECTIONS",
                    get("DB_MAX_CONNECTIONS"),
                    DEFAULT_DB_MAX_CONNECTIONS,
                )?,
            },
            logging: LoggingConfig {
                format: match get("LOG_FORMAT").as_deref() {
                    None | Some("pretty") => LogFormat::Pretty,
                    Some("json") => LogFormat::Json,
                    Some(other) => {
                        return Err(ConfigError::Invalid {
                            name: "LOG_FORMAT",
                            value: other.to_string(),
                        });
                    }
                },
                filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| env.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DB_USER", "app"), ("DB_NAME", "users")]))
            .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.password, "");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[
            ("DB_USER", "app"),
            ("DB_NAME", "users"),
            ("PORT", ""),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn reads_database_settings() {
        let config = Config::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "users"),
            ("PORT", "8080"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn reports_missing_and_invalid_params() {
        assert_eq!(
            Config::from_lookup(lookup(&[("DB_NAME", "users")])).unwrap_err(),
            ConfigError::Missing("DB_USER")
        );
        assert_eq!(
            Config::from_lookup(lookup(&[
                ("DB_USER", "app"),
                ("DB_NAME", "users"),
                ("PORT", "http"),
            ]))
            .unwrap_err(),
            ConfigError::Invalid {
                name: "PORT",
                value: "http".to_string()
            }
        );
    }
}
