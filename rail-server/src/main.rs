use tracing::info;
use tracing_subscriber::EnvFilter;

use rail_server::config::ServerConfig;
use rail_server::service::RailService;
use rail_server::upstream::{ErailClient, MockUpstream};
use rail_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "rail_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let app = match &config.fixture_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving recorded upstream responses");
            let upstream = MockUpstream::from_dir(dir)?;
            create_router(AppState::new(RailService::new(upstream)))
        }
        None => {
            info!(base_url = %config.upstream.base_url, "using live upstream");
            let upstream = ErailClient::new(config.upstream.clone())?;
            create_router(AppState::new(RailService::new(upstream)))
        }
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "rail server listening");
    info!("  GET /api/train/getTrain?trainNo=");
    info!("  GET /api/train/betweenStations?from=&to=");
    info!("  GET /api/train/getTrainOn?from=&to=&date=DD-MM-YYYY");
    info!("  GET /api/train/getRoute?trainNo=");
    info!("  GET /api/train/stationLive?code=");

    axum::serve(listener, app).await?;
    Ok(())
}
