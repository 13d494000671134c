//! Rent-a-dad entry-point: loads settings, prepares storage and serves pages.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dad_rental::inbound::http::health::HealthState;
use dad_rental::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{
    AppSettings, BuildMode, ServerConfig, create_server, load_session_key, session_flags_from_env,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mode = BuildMode::from_debug_assertions();
    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let flags = session_flags_from_env(&DefaultEnv::new(), mode).map_err(std::io::Error::other)?;
    let key = load_session_key(&settings.session_key_file(), mode, flags.allow_ephemeral)
        .map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(key, flags.cookie_secure, settings.bind_addr())
        .with_password_memory(settings.password_memory_kib());

    match settings.database_url() {
        Some(url) => {
            let pool = prepare_database(url, settings.db_max_connections()).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; using in-memory storage"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %settings.bind_addr(), "starting server");
    let server = create_server(health_state, config)?;
    server.await
}

/// Apply migrations, then open the connection pool.
async fn prepare_database(url: &str, max_connections: u32) -> std::io::Result<DbPool> {
    let migration_url = url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool_config = PoolConfig::new(url).with_max_size(max_connections);
    DbPool::connect(&pool_config)
        .await
        .map_err(std::io::Error::other)
}
