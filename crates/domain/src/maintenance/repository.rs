use super::{MaintenanceOrder, MaintenanceType};
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn find_by_type(
        &self,
        kind: MaintenanceType,
    ) -> Result<Vec<MaintenanceOrder>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceOrder>, DomainError>;

    /// Stores `order` under a freshly assigned id; the incoming id is ignored
    async fn insert(&self, order: MaintenanceOrder) -> Result<MaintenanceOrder, DomainError>;

    /// Update an existing record; unknown ids are `NotFound`.
    async fn save(&self, order: &MaintenanceOrder) -> Result<(), DomainError>;

    async fn save_all(&self, orders: &[MaintenanceOrder]) -> Result<(), DomainError> {
        for order in orders {
            self.save(order).await?;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
