//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Database parameters may be
//! given either as a single `DATABASE_URL` or as individual `DB_*` parts.

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::fmt;
use std::str::FromStr;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_SSL_MODE: &str = "require";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 3000;

/// Where the database connection comes from
#[derive(Clone, PartialEq)]
pub enum DatabaseConfig {
    /// Full connection URL, used as-is
    Url(String),

    /// Individual connection parameters
    Parts {
        user: String,
        password: String,
        host: String,
        port: u16,
        dbname: String,
        sslmode: String,
    },
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseConfig::Url(_) => f.debug_tuple("Url").field(&"<redacted>").finish(),
            DatabaseConfig::Parts {
                user,
                host,
                port,
                dbname,
                sslmode,
                ..
            } => f
                .debug_struct("Parts")
                .field("user", user)
                .field("password", &"<redacted>")
                .field("host", host)
                .field("port", port)
                .field("dbname", dbname)
                .field("sslmode", sslmode)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection source
    pub database: DatabaseConfig,

    /// Pool ceiling
    pub max_connections: u32,

    /// Comma-separated CORS allow-list, `*` for permissive
    pub cors_allowed_origins: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} is required when DATABASE_URL is not set", key))
        };

        let database = match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Parts {
                user: required("DB_USER")?,
                password: required("DB_PASSWORD")?,
                host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                port: match lookup("DB_PORT") {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| anyhow::anyhow!("DB_PORT must be a port number, got '{}'", raw))?,
                    None => DEFAULT_DB_PORT,
                },
                dbname: required("DB_NAME")?,
                sslmode: lookup("DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSL_MODE.to_string()),
            },
        };

        Ok(Self {
            database,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "jobboard=debug,tower_http=debug".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }

    /// Connection options for the configured database
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match &self.database {
            DatabaseConfig::Url(url) => PgConnectOptions::from_str(url)
                .map_err(|e| anyhow::anyhow!("Invalid DATABASE_URL: {}", e)),
            DatabaseConfig::Parts {
                user,
                password,
                host,
                port,
                dbname,
                sslmode,
            } => {
                let ssl_mode = PgSslMode::from_str(sslmode)
                    .map_err(|e| anyhow::anyhow!("Invalid DB_SSLMODE '{}': {}", sslmode, e))?;
                Ok(PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(dbname)
                    .ssl_mode(ssl_mode))
            }
        }
    }
}
