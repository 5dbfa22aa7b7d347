use std::sync::Arc;

use tracing::instrument;

use models::order;

use crate::errors::ServiceError;
use crate::order::domain::{OrderDraft, OrderPatch};
use crate::order::repository::OrderRepository;

/// Application service encapsulating order business rules.
/// Field validation happens here so every caller shares the same contract.
pub struct OrderService<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, draft), fields(item_name = %draft.item_name))]
    pub async fn create(&self, draft: &OrderDraft) -> Result<order::Model, ServiceError> {
        order::validate_item_name(&draft.item_name)?;
        order::validate_quantity(draft.quantity)?;
        order::validate_price(draft.price)?;
        self.repo.create(draft).await
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<order::Model>, ServiceError> {
        self.repo.list(skip, limit).await
    }

    pub async fn get(&self, id: i32) -> Result<order::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("order"))
    }

    /// Fetch-then-patch: absent ids are NotFound, supplied fields are
    /// validated with the create rules, omitted fields stay untouched.
    pub async fn update(&self, id: i32, patch: &OrderPatch) -> Result<order::Model, ServiceError> {
        if let Some(name) = &patch.item_name {
            order::validate_item_name(name)?;
        }
        if let Some(quantity) = patch.quantity {
            order::validate_quantity(quantity)?;
        }
        if let Some(price) = patch.price {
            order::validate_price(price)?;
        }
        let existing = self.get(id).await?;
        if patch.is_empty() {
            return Ok(existing);
        }
        self.repo.update(existing, patch).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let existing = self.get(id).await?;
        self.repo.delete(existing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<order::Model>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl OrderRepository for InMemoryRepo {
        async fn find_by_id(&self, id: i32) -> Result<Option<order::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
        }

        async fn list(&self, skip: u64, limit: u64) -> Result<Vec<order::Model>, ServiceError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .skip(skip as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn create(&self, draft: &OrderDraft) -> Result<order::Model, ServiceError> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let m = order::Model {
                id: *next,
                item_name: draft.item_name.clone(),
                quantity: draft.quantity,
                price: draft.price,
                created_at: Utc::now().into(),
            };
            self.rows.lock().unwrap().push(m.clone());
            Ok(m)
        }

        async fn update(
            &self,
            existing: order::Model,
            patch: &OrderPatch,
        ) -> Result<order::Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|m| m.id == existing.id)
                .ok_or_else(|| ServiceError::not_found("order"))?;
            if let Some(name) = &patch.item_name {
                slot.item_name = name.clone();
            }
            if let Some(quantity) = patch.quantity {
                slot.quantity = quantity;
            }
            if let Some(price) = patch.price {
                slot.price = price;
            }
            Ok(slot.clone())
        }

        async fn delete(&self, existing: order::Model) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().retain(|m| m.id != existing.id);
            Ok(())
        }
    }

    fn svc() -> OrderService<InMemoryRepo> {
        OrderService::new(Arc::new(InMemoryRepo::default()))
    }

    fn draft(name: &str, quantity: i32, price: f64) -> OrderDraft {
        OrderDraft { item_name: name.into(), quantity, price }
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields() {
        let s = svc();
        assert!(matches!(
            s.create(&draft("", 1, 1.0)).await,
            Err(ServiceError::Model(_))
        ));
        assert!(matches!(
            s.create(&draft("Widget", -1, 1.0)).await,
            Err(ServiceError::Model(_))
        ));
        assert!(matches!(
            s.create(&draft("Widget", 1, -0.5)).await,
            Err(ServiceError::Model(_))
        ));
        // nothing persisted by the rejected calls
        assert!(s.list(0, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let s = svc();
        let created = s.create(&draft("Widget", 3, 9.99)).await.unwrap();
        assert!(created.id > 0);
        let got = s.get(created.id).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let s = svc();
        assert!(matches!(s.get(999_999).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let s = svc();
        let created = s.create(&draft("Widget", 3, 9.99)).await.unwrap();
        let patch = OrderPatch { quantity: Some(5), ..Default::default() };
        let updated = s.update(created.id, &patch).await.unwrap();
        assert_eq!(updated.quantity, 5);
        assert_eq!(updated.item_name, "Widget");
        assert_eq!(updated.price, 9.99);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_empty_patch_returns_unchanged() {
        let s = svc();
        let created = s.create(&draft("Widget", 3, 9.99)).await.unwrap();
        let updated = s.update(created.id, &OrderPatch::default()).await.unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn update_validates_supplied_fields() {
        let s = svc();
        let created = s.create(&draft("Widget", 3, 9.99)).await.unwrap();
        let patch = OrderPatch { item_name: Some("".into()), ..Default::default() };
        assert!(matches!(s.update(created.id, &patch).await, Err(ServiceError::Model(_))));
        // original row untouched
        assert_eq!(s.get(created.id).await.unwrap().item_name, "Widget");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let s = svc();
        let patch = OrderPatch { quantity: Some(5), ..Default::default() };
        assert!(matches!(s.update(42, &patch).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let s = svc();
        let created = s.create(&draft("Widget", 3, 9.99)).await.unwrap();
        s.delete(created.id).await.unwrap();
        assert!(matches!(s.get(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(s.delete(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_windows_over_rows() {
        let s = svc();
        for i in 1..=3 {
            s.create(&draft(&format!("item_{i}"), i, 1.0)).await.unwrap();
        }
        assert_eq!(s.list(0, 2).await.unwrap().len(), 2);
        assert_eq!(s.list(2, 2).await.unwrap().len(), 1);
        assert!(s.list(3, 2).await.unwrap().is_empty());
    }
}
