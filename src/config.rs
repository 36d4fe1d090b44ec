// src/config.rs
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid(format!(
                "STORAGE_BACKEND must be `postgres` or `memory`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    storage_backend: StorageBackend,
    database_url: Option<String>,
    database_max_connections: u32,
    listen_addr: String,
    api_tokens: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, reading a `.env`
    /// file first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_backend = lookup("STORAGE_BACKEND")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or(StorageBackend::Postgres);

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`"
                    )));
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let api_tokens = lookup("API_TOKENS").unwrap_or_default();
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|value| split_list(&value))
            .unwrap_or_default();

        Ok(Self {
            storage_backend,
            database_url,
            database_max_connections,
            listen_addr,
            api_tokens,
            allowed_origins,
        })
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Raw `token=user-id:role,...` table.
    pub fn api_tokens(&self) -> &str {
        &self.api_tokens
    }

    /// Allowed CORS origins; empty allows any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
