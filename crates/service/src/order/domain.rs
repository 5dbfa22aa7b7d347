use serde::{Deserialize, Serialize};

/// Input for creating an order. `id` and `created_at` are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub item_name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Partial update payload; only the supplied fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.quantity.is_none() && self.price.is_none()
    }
}
