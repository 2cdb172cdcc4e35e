use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rail_server::config::ServerConfig;
use rail_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(variable = e.variable(), "Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load once up front so a broken data set is reported at startup
    let state = AppState::from_config(&config);
    match state.network.network().await {
        Ok(network) => info!(
            stations = network.station_count(),
            segments = network.segment_count(),
            "Rail network ready"
        ),
        Err(e) => error!("Rail network could not be loaded: {e}"),
    }

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        addr = %config.bind_addr,
        stations = %config.stations_path.display(),
        distances = %config.distances_path.display(),
        ttl_secs = config.network_ttl.as_secs(),
        "Rail routing server listening"
    );
    info!("API endpoints:");
    info!("  GET  /health");
    info!("  POST /api/v1/register");
    info!("  GET  /api/v1/me");
    info!("  GET  /api/v1/stations");
    info!("  POST /api/v1/routes");
    info!("  GET  /api/v1/stats/distances");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
