use super::{NewReservation, Reservation, find_conflict};
use crate::DomainError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for reservation persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations booked on `date`, across every resource
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError>;

    async fn insert(&self, reservation: NewReservation) -> Result<Reservation, DomainError>;

    /// Insert unless the slot collides with another booking of the same
    /// resource. The default checks, then inserts; local caches do both
    /// under one write lock.
    async fn insert_if_free(&self, draft: NewReservation) -> Result<Reservation, DomainError> {
        let slot = draft.slot()?;
        let existing = self.find_by_date(draft.date).await?;
        if let Some(hit) = find_conflict(&existing, &draft.resource_id, draft.date, &slot, None) {
            return Err(hit.conflict_error());
        }
        self.insert(draft).await
    }

    /// Update an existing record; unknown ids are `NotFound`.
    async fn save(&self, reservation: &Reservation) -> Result<(), DomainError>;

    /// Write many records. The default updates each in turn; local caches
    /// override it with an upsert so remote results can be mirrored.
    async fn save_all(&self, reservations: &[Reservation]) -> Result<(), DomainError> {
        for reservation in reservations {
            self.save(reservation).await?;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
