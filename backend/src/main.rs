//! Server entry point: loads settings, prepares storage, serves the API.

mod server;

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ortho_config::OrthoConfig;
use student_records::inbound::http::health::HealthState;
use student_records::outbound::persistence::{DbPool, migrations};
use student_records::settings::AppSettings;

use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn apply_migrations(database_url: String) -> io::Result<()> {
    let applied = web::block(move || migrations::run_pending(&database_url))
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;
    info!(count = applied.len(), versions = ?applied, "migrations applied");
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = AppSettings::load().map_err(|err| io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let secret = settings.shared_secret().map_err(io::Error::other)?;
    info!(fingerprint = %secret.fingerprint(), "shared secret loaded");

    let mut config = ServerConfig::new(bind_addr, secret);
    if let Some(pool_config) = settings.pool_config() {
        if settings.run_migrations() {
            apply_migrations(pool_config.database_url().to_owned()).await?;
        }
        let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
