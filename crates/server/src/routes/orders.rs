use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing, Json, Router,
};
use serde::Deserialize;
use tracing::info;

use service::order::domain::{OrderDraft, OrderPatch};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", routing::post(create).get(list))
        .route("/:id", routing::get(get).put(update).delete(delete))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

#[utoipa::path(
    post, path = "/orders/", tag = "orders",
    request_body = crate::openapi::CreateOrderInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderDoc),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<OrderDraft>,
) -> Result<(StatusCode, Json<models::order::Model>), JsonApiError> {
    let created = state.orders.create(&draft).await?;
    info!(id = created.id, item_name = %created.item_name, "created order");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/orders/", tag = "orders",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::OrderDoc]),
        (status = 500, description = "Store Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<models::order::Model>>, JsonApiError> {
    let rows = state.orders.list(q.skip, q.limit).await?;
    info!(count = rows.len(), skip = q.skip, limit = q.limit, "list orders");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OrderDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::order::Model>, JsonApiError> {
    let order = state.orders.get(id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    put, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = crate::openapi::UpdateOrderInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OrderDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<models::order::Model>, JsonApiError> {
    let updated = state.orders.update(id, &patch).await?;
    info!(id = updated.id, "updated order");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.orders.delete(id).await?;
    info!(id, "deleted order");
    Ok(StatusCode::NO_CONTENT)
}
