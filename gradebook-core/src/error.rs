/// Structured error types for gradebook-core.
///
/// Uses `thiserror` so the CLI can wrap them in `anyhow` while library
/// consumers still match on concrete variants.
use thiserror::Error;

/// Configuration failures detected before any connection attempt.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required environment variables are unset
    #[error("Missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// Port is present but not a valid TCP port number
    #[error("Invalid port '{value}': expected a number between 0 and 65535")]
    InvalidPort { value: String },
}

/// Errors raised while talking to the database.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// Table or column name outside the allow-list
    #[error("unknown {kind} '{name}'")]
    UnknownIdentifier { kind: &'static str, name: String },
}

/// Table rendering failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrintError {
    #[error("row {row} has {actual} values, but there are {expected} fields")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for database operations
pub type DbResult<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create an unknown-identifier error
    pub fn unknown_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownIdentifier {
            kind,
            name: name.into(),
        }
    }
}
