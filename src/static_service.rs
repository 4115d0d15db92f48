use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tokio::sync::OnceCell;

use crate::config::APP_CONFIG;

pub static DATABASE_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

/// Opens the connection pool on first use and returns the shared handle.
pub async fn get_database_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DATABASE_CONNECTION
        .get_or_try_init(|| async {
            let mut options = ConnectOptions::new(APP_CONFIG.database_url.clone());
            options
                .max_connections(APP_CONFIG.database_max_connections)
                .connect_timeout(Duration::from_secs(10))
                .sqlx_logging(false);

            let conn = Database::connect(options)
                .await
                .context("failed to connect to database")?;
            tracing::info!(
                max_connections = APP_CONFIG.database_max_connections,
                "database connection established"
            );
            Ok(conn)
        })
        .await
}

/// Shared handle for request handlers. Fails if start-up has not connected yet.
pub fn database() -> Result<&'static DatabaseConnection, DbErr> {
    DATABASE_CONNECTION
        .get()
        .ok_or_else(|| DbErr::Custom("database connection not initialised".to_string()))
}
