use super::{Equipment, NewEquipment};
use crate::DomainError;
use async_trait::async_trait;

/// Persistence contract for equipment, implemented by both the remote
/// database and the local cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// All equipment ordered by name; inactive entries only when asked for
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Equipment>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>, DomainError>;

    /// Insert and return the stored record with its assigned id
    async fn insert(&self, equipment: NewEquipment) -> Result<Equipment, DomainError>;

    /// Update an existing record; unknown ids are `NotFound`.
    async fn save(&self, equipment: &Equipment) -> Result<(), DomainError>;

    /// Save many records; caches override this with a single upsert used for mirroring
    async fn save_all(&self, items: &[Equipment]) -> Result<(), DomainError> {
        for item in items {
            self.save(item).await?;
        }
        Ok(())
    }
}

/// Ids hidden from every equipment listing. Only ever kept locally.
#[async_trait]
pub trait EquipmentBlacklist: Send + Sync {
    async fn hidden_ids(&self) -> Result<Vec<String>, DomainError>;

    async fn hide(&self, id: &str) -> Result<(), DomainError>;
}
