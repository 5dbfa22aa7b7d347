use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
    QuerySelect, Set,
};

use models::order;

use crate::errors::ServiceError;
use crate::order::domain::{OrderDraft, OrderPatch};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<order::Model>, ServiceError>;
    /// Window over all orders in insertion order: skip `skip` rows, return at
    /// most `limit`. Empty when `skip` exceeds the row count.
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<order::Model>, ServiceError>;
    async fn create(&self, draft: &OrderDraft) -> Result<order::Model, ServiceError>;
    async fn update(
        &self,
        existing: order::Model,
        patch: &OrderPatch,
    ) -> Result<order::Model, ServiceError>;
    async fn delete(&self, existing: order::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation. The `DatabaseConnection` is a
/// bounded pool handle; every statement acquires a connection and releases it
/// on all exit paths.
pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<order::Model>, ServiceError> {
        order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<order::Model>, ServiceError> {
        // Explicit ORDER BY id keeps "insertion order" deterministic on Postgres.
        order::Entity::find()
            .order_by_asc(order::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, draft: &OrderDraft) -> Result<order::Model, ServiceError> {
        let am = order::ActiveModel {
            item_name: Set(draft.item_name.clone()),
            quantity: Set(draft.quantity),
            price: Set(draft.price),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(
        &self,
        existing: order::Model,
        patch: &OrderPatch,
    ) -> Result<order::Model, ServiceError> {
        let mut am = existing.into_active_model();
        if let Some(name) = &patch.item_name {
            am.item_name = Set(name.clone());
        }
        if let Some(quantity) = patch.quantity {
            am.quantity = Set(quantity);
        }
        if let Some(price) = patch.price {
            am.price = Set(price);
        }
        // `id` and `created_at` stay Unchanged, so they never appear in the SET list.
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, existing: order::Model) -> Result<(), ServiceError> {
        existing.delete(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
