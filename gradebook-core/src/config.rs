use std::path::{Path, PathBuf};

use sqlx::postgres::PgConnectOptions;
use tracing::{debug, info};

use crate::error::ConfigError;

pub const ENV_DB_NAME: &str = "POSTGRES_DB";
pub const ENV_DB_USER: &str = "POSTGRES_USER";
pub const ENV_DB_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";

/// Load environment variables from .env files in multiple locations
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ./docker/.env (the compose file's env file)
/// 4. ~/.gradebook/.env
///
/// dotenvy never overwrites a variable that is already set, so earlier
/// files win over later ones. Returns the files that were loaded.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env"), Path::new("docker").join(".env")];
    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(".gradebook").join(".env"));
    }
    load_dotenv_files(&candidates)
}

/// Load each existing file in order, skipping the ones that are absent or unreadable.
pub fn load_dotenv_files(candidates: &[PathBuf]) -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    for env_file in candidates {
        if !env_file.exists() {
            continue;
        }
        match dotenvy::from_path(env_file) {
            Ok(()) => {
                debug!("Loaded .env from {}", env_file.display());
                loaded_from.push(env_file.clone());
            }
            Err(e) => {
                debug!("Failed to load {}: {}", env_file.display(), e);
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("Using environment variables only (no .env file found)");
    } else {
        let joined: Vec<String> = loaded_from.iter().map(|p| p.display().to_string()).collect();
        info!("Loaded configuration from: {}", joined.join(", "));
    }

    loaded_from
}

/// Raw connection credentials, each possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

/// Validated connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            name: lookup(ENV_DB_NAME),
            user: lookup(ENV_DB_USER),
            password: lookup(ENV_DB_PASSWORD),
            host: lookup(ENV_DB_HOST),
            port: lookup(ENV_DB_PORT),
        }
    }

    /// Check that every field is present and the port parses.
    ///
    /// All missing variables are reported together in a single
    /// [`ConfigError::Missing`].
    pub fn validate(&self) -> Result<DbConfig, ConfigError> {
        let fields = [
            (ENV_DB_NAME, &self.name),
            (ENV_DB_USER, &self.user),
            (ENV_DB_PASSWORD, &self.password),
            (ENV_DB_HOST, &self.host),
            (ENV_DB_PORT, &self.port),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let raw_port = self.port.clone().unwrap_or_default();
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: raw_port })?;

        Ok(DbConfig {
            name: self.name.clone().unwrap_or_default(),
            user: self.user.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            host: self.host.clone().unwrap_or_default(),
            port,
        })
    }
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
