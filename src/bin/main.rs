use std::net::SocketAddr;

use anyhow::Context;
use grading_service::static_service::get_database_connection;
use grading_service::{app, config::APP_CONFIG, utils::tracing::init_standard_tracing};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    tracing::info!(app_env = %APP_CONFIG.app_env, "Starting application...");

    let db_connection = get_database_connection().await?;

    if APP_CONFIG.run_migrations {
        tracing::info!("Applying pending migrations...");
        Migrator::up(db_connection, None)
            .await
            .context("failed to apply migrations")?;
    }

    let app = app::create_app()?;

    let http_address = format!("0.0.0.0:{}", APP_CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&http_address)
        .await
        .with_context(|| format!("failed to bind {http_address}"))?;

    tracing::info!("HTTP server listening on {}", &http_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("HTTP server stopped")?;

    Ok(())
}
