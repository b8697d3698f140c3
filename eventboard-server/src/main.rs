mod routes;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use eventboard_core::config::BoardConfig;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BoardConfig::load()?;
    let state = AppState::new(&config)?;

    // Initial load cycle; a failure here is the visible error state, not a
    // reason to refuse to serve
    if let Err(err) = state.events.load_cycle().await {
        tracing::warn!("initial load failed: {err}");
    }
    let refresh = state
        .events
        .spawn_refresh(Duration::from_secs(config.refresh_minutes * 60));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .merge(routes::announcements::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("eventboard-server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    refresh.abort();
    Ok(())
}
