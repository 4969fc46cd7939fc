// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::application::drawing_service::DrawingService;
use crate::application::map_service::MapProxyService;
use crate::application::tracker_service::TrackerService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::drawing_store::FileDrawingStore;
use crate::infrastructure::mapbox_client::MapboxClient;
use crate::infrastructure::traccar_client::TraccarClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_trackers, health_check, load_drawings, mapbox_proxy, save_drawings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_config()?;

    // Create adapters (infrastructure layer)
    let traccar = Arc::new(TraccarClient::new(
        config.traccar_url,
        config.traccar_user,
        config.traccar_password,
    ));
    let mapbox = Arc::new(MapboxClient::new(config.mapbox_url, config.mapbox_token));
    let drawing_store = Arc::new(FileDrawingStore::new(&config.drawings_file));

    // Create services (application layer)
    let tracker_service = TrackerService::new(traccar);
    let map_service = MapProxyService::new(mapbox);
    let drawing_service = DrawingService::new(drawing_store);

    // Create application state
    let state = Arc::new(AppState {
        tracker_service,
        map_service,
        drawing_service,
    });

    // Build router (presentation layer); anything unrouted falls through to
    // the static asset directory, which serves index.html at the root
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/getTrackers", get(get_trackers))
        .route("/mapbox/:endpoint", get(mapbox_proxy))
        .route("/api/drawings", get(load_drawings).post(save_drawings))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting tracker-map service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
