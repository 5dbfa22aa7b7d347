use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use service::order::repository::SeaOrmOrderRepository;
use service::order::service::OrderService;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => error!(error = %e, "failed to listen for shutdown signal"),
    }
}

/// Public entry: connect the store, build the app and serve until shutdown.
/// The config is constructed once by the caller and passed in; nothing here
/// reads ambient global state.
pub async fn run(cfg: &AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;

    let repo = Arc::new(SeaOrmOrderRepository::new(db));
    let state = ServerState { orders: Arc::new(OrderService::new(repo)) };

    let app: Router = routes::build_router(&cfg.app.name, build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, app = %cfg.app.name, env = %cfg.app.env, "starting http server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
