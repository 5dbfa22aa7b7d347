use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::order::repository::SeaOrmOrderRepository;
use service::order::service::OrderService;

pub mod orders;

#[derive(Clone)]
pub struct ServerState {
    pub orders: Arc<OrderService<SeaOrmOrderRepository>>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Liveness OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, orders, generated API docs.
pub fn build_router(app_name: &str, cors: CorsLayer, state: ServerState) -> Router {
    let mut doc = crate::openapi::ApiDoc::openapi();
    doc.info.title = app_name.to_string();

    Router::new()
        .route("/health", get(health))
        .nest("/orders", orders::router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", doc))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
