use super::{NewSafetyRecord, RegulationType, SafetyRecord};
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SafetyRepository: Send + Sync {
    async fn find_by_regulation(
        &self,
        nr_type: RegulationType,
    ) -> Result<Vec<SafetyRecord>, DomainError>;

    async fn insert(&self, record: NewSafetyRecord) -> Result<SafetyRecord, DomainError>;

    /// Update an existing record; unknown ids are `NotFound`.
    async fn save(&self, record: &SafetyRecord) -> Result<(), DomainError>;

    async fn save_all(&self, records: &[SafetyRecord]) -> Result<(), DomainError> {
        for record in records {
            self.save(record).await?;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
