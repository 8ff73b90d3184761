//! Service entry-point: loads settings, builds the connection pool and runs
//! the HTTP server.

mod server;

use std::io;
use std::net::ToSocketAddrs;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use biblioteca::inbound::http::health::HealthState;
use biblioteca::outbound::persistence::{DbPool, PoolConfig};
use biblioteca::settings::AppSettings;
use server::{ServerConfig, create_server, fail_liveness_on};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|e| io::Error::other(format!("invalid configuration: {e}")))?;

    let bind_addr = (settings.bind_host(), settings.bind_port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            io::Error::other(format!(
                "bind address {}:{} did not resolve",
                settings.bind_host(),
                settings.bind_port
            ))
        })?;

    let database_url = settings
        .database_url()
        .map_err(|e| io::Error::other(format!("invalid database url: {e}")))?;
    let pool_config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| io::Error::other(format!("database pool: {e}")))?;
    info!(
        db_host = settings.db_host(),
        db_name = settings.db_name(),
        "database pool ready"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))?;
    actix_web::rt::spawn(fail_liveness_on(
        actix_web::rt::signal::ctrl_c(),
        health_state,
    ));
    server.await
}
