//! Connection factory
//!
//! Opens one plain `PgConnection` (no pool). Outside an explicit
//! transaction every statement on it autocommits.

use sqlx::{Connection, PgConnection};
use tracing::{debug, error, info};

use crate::config::{Credentials, DbConfig};

/// Open a connection from raw credentials.
///
/// Returns `None` without attempting to connect if any credential is
/// absent or malformed, and `None` after reporting the error if the
/// connection itself fails.
pub async fn create_connection(credentials: &Credentials) -> Option<PgConnection> {
    match credentials.validate() {
        Ok(config) => connect(&config).await,
        Err(err) => {
            debug!(%err, "skipping connection attempt");
            None
        }
    }
}

/// Open a connection from validated settings.
pub async fn connect(config: &DbConfig) -> Option<PgConnection> {
    debug!(host = %config.host, port = config.port, database = %config.name, "connecting");

    match PgConnection::connect_with(&config.connect_options()).await {
        Ok(conn) => {
            info!("Connection to PostgreSQL DB successful!");
            Some(conn)
        }
        Err(e) => {
            error!("Failed to create connection: error \"{}\" occurred.", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_skip_connection() {
        let credentials = Credentials {
            name: Some("homework".to_string()),
            ..Default::default()
        };

        assert!(create_connection(&credentials).await.is_none());
    }

    #[tokio::test]
    async fn bad_port_skips_connection() {
        let credentials = Credentials {
            name: Some("homework".to_string()),
            user: Some("postgres".to_string()),
            password: Some("secret".to_string()),
            host: Some("localhost".to_string()),
            port: Some("not-a-port".to_string()),
        };

        assert!(create_connection(&credentials).await.is_none());
    }

    #[tokio::test]
    async fn refused_connection_returns_none() {
        // Nothing listens on port 1; the attempt fails fast with ECONNREFUSED.
        let config = DbConfig {
            name: "homework".to_string(),
            user: "postgres".to_string(),
            password: "secret".to_string(),
            host: "127.0.0.1".to_string(),
            port: 1,
        };

        assert!(connect(&config).await.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connects_with_environment_credentials() {
        crate::config::load_dotenv();
        let conn = create_connection(&Credentials::from_env())
            .await
            .expect("connection failed");
        conn.close().await.expect("close failed");
    }
}
