//! Command implementations for gradebook CLI

pub mod demo;
pub mod records;
pub mod setup;

use anyhow::{Context, Result};
use gradebook_core::db::connect;
use gradebook_core::{load_dotenv, Credentials, QueryExecutor};
use tracing::warn;

// Re-export main dispatcher functions for flat access from main.rs
pub use demo::run_demo;
pub use records::run_records;
pub use setup::{run_clear, run_init, run_populate};

/// Load configuration and open the single connection every command works on.
pub async fn open_session() -> Result<QueryExecutor> {
    load_dotenv();
    let config = Credentials::from_env()
        .validate()
        .context("Database configuration is incomplete (set it in the environment or a .env file)")?;
    let conn = connect(&config)
        .await
        .with_context(|| format!("Could not connect to PostgreSQL at {}:{}", config.host, config.port))?;
    Ok(QueryExecutor::new(conn))
}

/// Close the session, logging instead of failing if the server already hung up.
pub async fn close_session(executor: QueryExecutor) {
    if let Err(err) = executor.close().await {
        warn!(error = %err, "failed to close connection cleanly");
    }
}
