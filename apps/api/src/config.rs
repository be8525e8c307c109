//! Environment-driven configuration
//!
//! Values come from process environment variables (`main` loads a `.env`
//! file into the environment first). The deployment environment (`ROSTER_ENV`) selects the
//! defaults: development falls back to a local SQLite file, production
//! insists on an explicit `DATABASE_URL`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEVELOPMENT_DATABASE_URL: &str = "sqlite://roster.db3";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown environment '{0}' (expected development or production)")]
    UnknownEnvironment(String),

    #[error("{0} must be set in production")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
    pub seeds_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ROSTER_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::default(),
        };

        let url = match (lookup("DATABASE_URL"), environment) {
            (Some(url), _) => url,
            (None, Environment::Development) => {
                tracing::warn!("DATABASE_URL not set, using default");
                DEVELOPMENT_DATABASE_URL.to_string()
            }
            (None, Environment::Production) => return Err(ConfigError::Missing("DATABASE_URL")),
        };

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let host = parse_or(&lookup, "HOST", DEFAULT_HOST)?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        Ok(Self {
            environment,
            database: DatabaseConfig {
                url,
                max_connections,
            },
            bind_addr: SocketAddr::new(host, port),
            seeds_dir: lookup("ROSTER_SEEDS_DIR").map(PathBuf::from),
        })
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
