use super::{FacilityStore, fell_back, falls_back, mirrored, require_text};
use chrono::{NaiveDate, NaiveTime};
use domain::DomainError;
use domain::report::{ReportMonth, ResourceUsage, usage_by_resource};
use domain::reservation::{
    NewReservation, Reservation, ReservationCategory, TimeSlot, find_conflict, resource_key,
};
use tracing::{debug, info};

impl FacilityStore {
    pub async fn get_reservations_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.reservations.find_by_date(date).await {
                Ok(items) => {
                    mirrored(
                        "get_reservations_by_date",
                        self.local.reservations.save_all(&items).await,
                    );
                    return Ok(items);
                }
                Err(e) if falls_back(&e) => fell_back("get_reservations_by_date", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.reservations.find_by_date(date).await
    }

    pub async fn get_all_reservations(&self) -> Result<Vec<Reservation>, DomainError> {
        if let Some(remote) = &self.remote {
            match remote.reservations.find_all().await {
                Ok(items) => {
                    mirrored(
                        "get_all_reservations",
                        self.local.reservations.save_all(&items).await,
                    );
                    return Ok(items);
                }
                Err(e) if falls_back(&e) => fell_back("get_all_reservations", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.reservations.find_all().await
    }

    pub async fn get_reservations_by_category(
        &self,
        category: ReservationCategory,
    ) -> Result<Vec<Reservation>, DomainError> {
        let mut items = self.get_all_reservations().await?;
        items.retain(|r| r.category == category);
        Ok(items)
    }

    /// Whether booking `[start, end)` for `resource_id` on `date` would collide
    /// with an existing reservation other than `exclude_id`. Scaffolding
    /// locations match however they are spelled.
    pub async fn check_overlap(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        resource_id: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let slot = TimeSlot::new(start, end)?;
        let existing = self.get_reservations_by_date(date).await?;
        Ok(find_conflict(&existing, resource_id.trim(), date, &slot, exclude_id).is_some())
    }

    async fn ensure_free(
        &self,
        resource_id: &str,
        date: NaiveDate,
        slot: &TimeSlot,
        exclude_id: Option<&str>,
    ) -> Result<(), DomainError> {
        let existing = self.get_reservations_by_date(date).await?;
        match find_conflict(&existing, resource_id, date, slot, exclude_id) {
            Some(hit) => {
                debug!(resource_id, existing_id = %hit.id, "Reservation conflict");
                Err(hit.conflict_error())
            }
            None => Ok(()),
        }
    }

    /// Scaffolding bookings are keyed by their normalized location.
    pub async fn create_reservation(
        &self,
        mut draft: NewReservation,
    ) -> Result<Reservation, DomainError> {
        let slot = draft.slot()?;
        require_text("Resource", &draft.resource_id)?;
        require_text("Requester", &draft.requester)?;
        draft.resource_id = resource_key(draft.category, &draft.resource_id);
        draft.cost_saved = Some(draft.cost_saved.unwrap_or(0.0));

        if let Some(remote) = &self.remote {
            self.ensure_free(&draft.resource_id, draft.date, &slot, None)
                .await?;
            match remote.reservations.insert(draft.clone()).await {
                Ok(reservation) => {
                    mirrored(
                        "create_reservation",
                        self.local
                            .reservations
                            .save_all(std::slice::from_ref(&reservation))
                            .await,
                    );
                    info!(id = %reservation.id, resource = %reservation.resource_id, "Reservation created");
                    return Ok(reservation);
                }
                Err(e) if falls_back(&e) => fell_back("create_reservation", &e),
                Err(e) => return Err(e),
            }
        }
        let reservation = self.local.reservations.insert_if_free(draft).await?;
        info!(id = %reservation.id, resource = %reservation.resource_id, "Reservation created locally");
        Ok(reservation)
    }

    /// Move an existing reservation; it never conflicts with itself.
    pub async fn reschedule_reservation(
        &self,
        mut reservation: Reservation,
    ) -> Result<Reservation, DomainError> {
        let slot = reservation.slot()?;
        require_text("Resource", &reservation.resource_id)?;
        require_text("Requester", &reservation.requester)?;
        reservation.resource_id = resource_key(reservation.category, &reservation.resource_id);
        self.ensure_free(
            &reservation.resource_id,
            reservation.date,
            &slot,
            Some(&reservation.id),
        )
        .await?;

        if let Some(remote) = &self.remote {
            match remote.reservations.save(&reservation).await {
                Ok(()) => {
                    mirrored(
                        "reschedule_reservation",
                        self.local
                            .reservations
                            .save_all(std::slice::from_ref(&reservation))
                            .await,
                    );
                    return Ok(reservation);
                }
                Err(e) if falls_back(&e) => fell_back("reschedule_reservation", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.reservations.save(&reservation).await?;
        Ok(reservation)
    }

    pub async fn delete_reservation(&self, id: &str) -> Result<(), DomainError> {
        if let Some(remote) = &self.remote {
            match remote.reservations.delete(id).await {
                Ok(()) => {
                    mirrored(
                        "delete_reservation",
                        self.local.reservations.delete(id).await,
                    );
                    info!(id, "Reservation deleted");
                    return Ok(());
                }
                Err(e) if falls_back(&e) => fell_back("delete_reservation", &e),
                Err(e) => return Err(e),
            }
        }
        self.local.reservations.delete(id).await?;
        info!(id, "Reservation deleted locally");
        Ok(())
    }

    /// Booked hours per resource within `month`.
    pub async fn usage_report(&self, month: ReportMonth) -> Result<Vec<ResourceUsage>, DomainError> {
        let reservations = self.get_all_reservations().await?;
        Ok(usage_by_resource(&reservations, month))
    }
}
