//! Backend entry-point: validates configuration, wires REST endpoints.

use actix_web::web;
use tracing::{error, warn};
use tracing_subscriber::{fmt, EnvFilter};

use groundwork::config::AppConfig;
use groundwork::inbound::http::health::HealthState;
use groundwork::server::{create_server, ServerConfig};

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

    // Fail fast: an invalid environment aborts before any request is served.
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "refusing to start with invalid configuration");
        std::io::Error::other(e.to_string())
    })?;

    let server_config = ServerConfig::new(&config, ([0, 0, 0, 0], 8080).into());
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, server_config)?;
    server.await
}
