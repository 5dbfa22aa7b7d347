use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct OrderDoc {
    pub id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
    /// RFC 3339 timestamp assigned by the store at creation
    pub created_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateOrderInputDoc {
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateOrderInputDoc {
    pub item_name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::orders::create,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::update,
        crate::routes::orders::delete,
    ),
    components(
        schemas(
            HealthResponse,
            OrderDoc,
            CreateOrderInputDoc,
            UpdateOrderInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "orders")
    )
)]
pub struct ApiDoc;
