use company_registry_utils::create_random_secret;
use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_OPEN_CONNS: u32 = 100;
const DEFAULT_MAX_IDLE_CONNS: u32 = 20;
const GENERATED_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: u16,
    /// Symmetric secret used to verify the HMAC signature of bearer tokens
    pub jwt_secret: String,
    pub postgres: PostgresConfig,
}

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    /// Full connection string. Takes precedence over the separate
    /// connection parameters when present.
    pub connection_string: Option<String>,
    pub pool: PoolConfig,
    /// Directory with the sql migrations which are run before the
    /// server starts accepting requests.
    pub migrations_dir_path: PathBuf,
}

/// Bounds of the shared connection pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolConfig {
    pub max_open_conns: u32,
    pub max_idle_conns: u32,
}

impl PoolConfig {
    /// A zero means the value was not configured and the default is used instead
    pub fn new(max_open_conns: u32, max_idle_conns: u32) -> Self {
        let max_open_conns = if max_open_conns == 0 {
            DEFAULT_MAX_OPEN_CONNS
        } else {
            max_open_conns
        };
        let max_idle_conns = if max_idle_conns == 0 {
            DEFAULT_MAX_IDLE_CONNS
        } else {
            max_idle_conns
        };
        Self {
            max_open_conns,
            max_idle_conns: max_idle_conns.min(max_open_conns),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the `Config` from the given key lookup, usually the environment.
    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match source("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(GENERATED_JWT_SECRET_LEN);
                info!("Secret for verifying tokens was generated and set to: {}", secret);
                secret
            }
        };

        let port = parse_or_default(&source, "PORT", DEFAULT_PORT);

        let postgres = PostgresConfig {
            host: source("POSTGRES_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or_default(&source, "POSTGRES_PORT", 5432),
            user: source("POSTGRES_USER").unwrap_or_else(|| "postgres".into()),
            password: source("POSTGRES_PASSWORD").unwrap_or_default(),
            dbname: source("POSTGRES_DBNAME").unwrap_or_else(|| "company".into()),
            connection_string: source("DATABASE_URL").filter(|url| !url.is_empty()),
            pool: PoolConfig::new(
                parse_or_default(&source, "POSTGRES_MAX_OPEN_CONNS", 0),
                parse_or_default(&source, "POSTGRES_MAX_IDLE_CONNS", 0),
            ),
            migrations_dir_path: source("POSTGRES_MIGRATIONS_DIR_PATH")
                .unwrap_or_else(|| "migrations".into())
                .into(),
        };

        Self {
            port,
            jwt_secret,
            postgres,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or_default<F, T>(source: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match source(key) {
        Some(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        None => default,
    }
}
