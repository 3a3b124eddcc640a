//! Startup configuration.
//!
//! Configuration is resolved once, before anything connects or binds:
//!
//! 1. Outside production, key/value pairs are read from an env file
//!    (default `.env`). A missing or unreadable file is fatal.
//! 2. Every key is looked up in the process environment first, then in the
//!    env file, then falls back to its default.
//!
//! Resolution itself is a pure function over a lookup closure so it can be
//! exercised without touching the process environment.

mod env_file;


use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

pub use env_file::read_env_file;

pub const ENV: &str = "ENV";
pub const MONGODB_URI: &str = "MONGODB_URI";
pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";
pub const MONGODB_DATABASE: &str = "MONGODB_DATABASE";
pub const MONGODB_COLLECTION: &str = "MONGODB_COLLECTION";
pub const STATIC_DIR: &str = "STATIC_DIR";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE: &str = "todoAppGoLang";
pub const DEFAULT_COLLECTION: &str = "todos";
pub const DEFAULT_STATIC_DIR: &str = "./client/dist";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Configuration errors. All of them are fatal at startup.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to load env file {path:?}: {message}")]
    #[diagnostic(
        code(todo_api::config::env_file),
        help("Create the file, pass --env-file, or set ENV=production to skip it")
    )]
    EnvFile { path: PathBuf, message: String },

    #[error("Missing required configuration: {key}")]
    #[diagnostic(code(todo_api::config::missing))]
    Missing { key: &'static str },

    #[error("Invalid port: '{value}'")]
    #[diagnostic(code(todo_api::config::invalid_port), help("PORT must be 0-65535"))]
    InvalidPort { value: String },

    #[error("Invalid host address: '{value}'")]
    #[diagnostic(code(todo_api::config::invalid_host))]
    InvalidHost { value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Deployment environment, taken from `ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Fully resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub environment: Environment,
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// MongoDB connection string
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    /// Pre-built frontend served at `/` in production
    pub static_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from a key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn resolve<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let environment = Environment::from_value(get(ENV).as_deref());
        let mongodb_uri = get(MONGODB_URI).ok_or(ConfigError::Missing { key: MONGODB_URI })?;

        let port = match get(PORT) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        let host = match get(HOST) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Self {
            environment,
            host,
            port,
            mongodb_uri,
            database: get(MONGODB_DATABASE).unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: get(MONGODB_COLLECTION).unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            static_dir: get(STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }

    /// Resolve configuration from the process environment, reading
    /// `env_file` first unless `ENV=production`.
    pub fn load(env_file: &Path) -> ConfigResult<Self> {
        let file_values = if Environment::from_value(env::var(ENV).ok().as_deref()).is_production()
        {
            HashMap::new()
        } else {
            read_env_file(env_file)?
        };

        Self::resolve(|key| env::var(key).ok().or_else(|| file_values.get(key).cloned()))
    }

    /// Override the bind host (e.g. from a CLI flag).
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Override the listen port (e.g. from a CLI flag).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
