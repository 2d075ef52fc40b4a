use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fuel_server::cache::CacheConfig;
use fuel_server::config::AppConfig;
use fuel_server::geocode::{Geocoder, NominatimClient};
use fuel_server::planner::PlannerConfig;
use fuel_server::routing::{OrsClient, Router};
use fuel_server::service::RouteService;
use fuel_server::stations::{JsonFileSource, StationCatalog};
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let geocoder = Geocoder::new(
        NominatimClient::new(config.geocoder.clone())?,
        &CacheConfig::geocode(),
    );
    let directions = OrsClient::new(config.directions.clone())?;
    if !directions.is_configured() {
        warn!("ORS_API_KEY not set. All routes will use the straight-line fallback.");
    }
    let router = Router::new(directions);

    // Load the station catalog (fail fast if unavailable)
    info!(path = %config.stations_path.display(), "Loading station catalog...");
    let catalog = StationCatalog::fetch(JsonFileSource::new(&config.stations_path)).await?;
    let stats = catalog.stats().await;
    info!(
        total = stats.total_stations,
        geocoded = stats.geocoded_stations,
        "Loaded station catalog"
    );

    // Spawn background task to refresh the catalog periodically
    let catalog_refresh = catalog.clone();
    let refresh_every = config.catalog_refresh;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_every);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match catalog_refresh.refresh().await {
                Ok(count) => info!(count, "Refreshed station catalog"),
                Err(e) => warn!(error = %e, "Failed to refresh station catalog"),
            }
        }
    });

    let service = RouteService::new(
        geocoder,
        router,
        catalog,
        PlannerConfig::default(),
        &CacheConfig::response(),
    );
    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Fuel Route Optimizer listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /                    - API info");
    info!("  GET  /health              - Health check");
    info!("  POST /api/route           - Plan fuel stops");
    info!("  GET  /api/stations/stats  - Station catalog stats");

    axum::serve(listener, app).await?;
    Ok(())
}
