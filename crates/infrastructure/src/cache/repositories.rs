//! Domain repositories backed by [`LocalCache`] documents.
//!
//! Each collection is read and rewritten whole, the way the dashboard kept
//! its offline state. Ids minted here are UUIDs so they can never collide
//! with the integer ids handed out by the remote database.

use super::{LocalCache, keys};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::DomainError;
use domain::equipment::{
    Equipment, EquipmentBlacklist, EquipmentRepository, NewEquipment, seed_equipment,
};
use domain::maintenance::{MaintenanceOrder, MaintenanceRepository, MaintenanceType};
use domain::reservation::{NewReservation, Reservation, ReservationRepository, find_conflict};
use domain::safety::{NewSafetyRecord, RegulationType, SafetyRecord, SafetyRepository};

fn new_local_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn cache_error(e: anyhow::Error) -> DomainError {
    DomainError::Storage(format!("Local cache error: {e}"))
}

/// Replace the entry with the same id, or append it.
fn upsert<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str) {
    match items.iter_mut().find(|existing| id_of(existing) == id_of(&item)) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

/// Replace the entry with the same id. `false` when there is none.
fn replace<T>(items: &mut [T], item: T, id_of: impl Fn(&T) -> &str) -> bool {
    match items.iter_mut().find(|existing| id_of(existing) == id_of(&item)) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Drop the entry with `id`. `false` when there is none.
fn remove<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

fn found(entity: &'static str, id: &str, hit: bool) -> Result<(), DomainError> {
    if hit {
        Ok(())
    } else {
        Err(DomainError::not_found(entity, id))
    }
}

// --- Equipment ---

#[derive(Clone)]
pub struct CachedEquipmentRepository {
    cache: LocalCache,
}

impl CachedEquipmentRepository {
    pub fn new(cache: LocalCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl EquipmentRepository for CachedEquipmentRepository {
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Equipment>, DomainError> {
        let mut items: Vec<Equipment> = self
            .cache
            .load(keys::EQUIPMENT, seed_equipment)
            .await
            .map_err(cache_error)?;

        if !include_inactive {
            items.retain(|e| e.is_active);
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>, DomainError> {
        let items: Vec<Equipment> = self
            .cache
            .load(keys::EQUIPMENT, seed_equipment)
            .await
            .map_err(cache_error)?;
        Ok(items.into_iter().find(|e| e.id == id))
    }

    async fn insert(&self, draft: NewEquipment) -> Result<Equipment, DomainError> {
        let item = draft.into_equipment(new_local_id());
        let stored = item.clone();
        self.cache
            .update(keys::EQUIPMENT, seed_equipment, |items: &mut Vec<Equipment>| {
                items.push(stored)
            })
            .await
            .map_err(cache_error)?;
        Ok(item)
    }

    async fn save(&self, item: &Equipment) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::EQUIPMENT, seed_equipment, |items: &mut Vec<Equipment>| {
                replace(items, item.clone(), |e| e.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Equipment", &item.id, hit)
    }

    /// Mirror of remote rows. A cache that never held equipment starts empty
    /// here, not from the seed list.
    async fn save_all(&self, incoming: &[Equipment]) -> Result<(), DomainError> {
        self.cache
            .update(keys::EQUIPMENT, Vec::new, |items: &mut Vec<Equipment>| {
                for item in incoming {
                    upsert(items, item.clone(), |e| e.id.as_str());
                }
            })
            .await
            .map_err(cache_error)
    }
}

#[derive(Clone)]
pub struct CachedEquipmentBlacklist {
    cache: LocalCache,
}

impl CachedEquipmentBlacklist {
    pub fn new(cache: LocalCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl EquipmentBlacklist for CachedEquipmentBlacklist {
    async fn hidden_ids(&self) -> Result<Vec<String>, DomainError> {
        self.cache
            .load(keys::EQUIPMENT_BLACKLIST, Vec::new)
            .await
            .map_err(cache_error)
    }

    async fn hide(&self, id: &str) -> Result<(), DomainError> {
        self.cache
            .update(keys::EQUIPMENT_BLACKLIST, Vec::new, |ids: &mut Vec<String>| {
                if !ids.iter().any(|hidden| hidden == id) {
                    ids.push(id.to_string());
                }
            })
            .await
            .map_err(cache_error)
    }
}

// --- Reservations ---

#[derive(Clone)]
pub struct CachedReservationRepository {
    cache: LocalCache,
}

impl CachedReservationRepository {
    pub fn new(cache: LocalCache) -> Self {
        Self { cache }
    }

    async fn load_all(&self) -> Result<Vec<Reservation>, DomainError> {
        self.cache
            .load(keys::RESERVATIONS, Vec::new)
            .await
            .map_err(cache_error)
    }
}

#[async_trait]
impl ReservationRepository for CachedReservationRepository {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, DomainError> {
        let mut items = self.load_all().await?;
        items.retain(|r| r.date == date);
        items.sort_by_key(|r| r.start_time);
        Ok(items)
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError> {
        let mut items = self.load_all().await?;
        items.sort_by_key(|r| (r.date, r.start_time));
        Ok(items)
    }

    async fn insert(&self, draft: NewReservation) -> Result<Reservation, DomainError> {
        let reservation = draft.into_reservation(new_local_id());
        let stored = reservation.clone();
        self.cache
            .update(keys::RESERVATIONS, Vec::new, |items: &mut Vec<Reservation>| {
                items.push(stored)
            })
            .await
            .map_err(cache_error)?;
        Ok(reservation)
    }

    async fn insert_if_free(&self, draft: NewReservation) -> Result<Reservation, DomainError> {
        let slot = draft.slot()?;
        let reservation = draft.into_reservation(new_local_id());
        self.cache
            .update(keys::RESERVATIONS, Vec::new, |items: &mut Vec<Reservation>| {
                match find_conflict(
                    items,
                    &reservation.resource_id,
                    reservation.date,
                    &slot,
                    None,
                ) {
                    Some(hit) => Err(hit.conflict_error()),
                    None => {
                        items.push(reservation.clone());
                        Ok(reservation)
                    }
                }
            })
            .await
            .map_err(cache_error)?
    }

    async fn save(&self, reservation: &Reservation) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::RESERVATIONS, Vec::new, |items: &mut Vec<Reservation>| {
                replace(items, reservation.clone(), |r| r.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Reservation", &reservation.id, hit)
    }

    async fn save_all(&self, incoming: &[Reservation]) -> Result<(), DomainError> {
        self.cache
            .update(keys::RESERVATIONS, Vec::new, |items: &mut Vec<Reservation>| {
                for reservation in incoming {
                    upsert(items, reservation.clone(), |r| r.id.as_str());
                }
            })
            .await
            .map_err(cache_error)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::RESERVATIONS, Vec::new, |items: &mut Vec<Reservation>| {
                remove(items, id, |r| r.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Reservation", id, hit)
    }
}

// --- Maintenance orders ---

#[derive(Clone)]
pub struct CachedMaintenanceRepository {
    cache: LocalCache,
}

impl CachedMaintenanceRepository {
    pub fn new(cache: LocalCache) -> Self {
        Self { cache }
    }

    async fn load_all(&self) -> Result<Vec<MaintenanceOrder>, DomainError> {
        self.cache
            .load(keys::MAINTENANCE, Vec::new)
            .await
            .map_err(cache_error)
    }
}

#[async_trait]
impl MaintenanceRepository for CachedMaintenanceRepository {
    async fn find_by_type(
        &self,
        kind: MaintenanceType,
    ) -> Result<Vec<MaintenanceOrder>, DomainError> {
        let mut items = self.load_all().await?;
        items.retain(|o| o.kind == kind);
        items.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceOrder>, DomainError> {
        Ok(self.load_all().await?.into_iter().find(|o| o.id == id))
    }

    async fn insert(&self, mut order: MaintenanceOrder) -> Result<MaintenanceOrder, DomainError> {
        order.id = new_local_id();
        let stored = order.clone();
        self.cache
            .update(keys::MAINTENANCE, Vec::new, |items: &mut Vec<MaintenanceOrder>| {
                items.push(stored)
            })
            .await
            .map_err(cache_error)?;
        Ok(order)
    }

    async fn save(&self, order: &MaintenanceOrder) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::MAINTENANCE, Vec::new, |items: &mut Vec<MaintenanceOrder>| {
                replace(items, order.clone(), |o| o.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Maintenance order", &order.id, hit)
    }

    async fn save_all(&self, incoming: &[MaintenanceOrder]) -> Result<(), DomainError> {
        self.cache
            .update(keys::MAINTENANCE, Vec::new, |items: &mut Vec<MaintenanceOrder>| {
                for order in incoming {
                    upsert(items, order.clone(), |o| o.id.as_str());
                }
            })
            .await
            .map_err(cache_error)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::MAINTENANCE, Vec::new, |items: &mut Vec<MaintenanceOrder>| {
                remove(items, id, |o| o.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Maintenance order", id, hit)
    }
}

// --- Safety records ---

#[derive(Clone)]
pub struct CachedSafetyRepository {
    cache: LocalCache,
}

impl CachedSafetyRepository {
    pub fn new(cache: LocalCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl SafetyRepository for CachedSafetyRepository {
    async fn find_by_regulation(
        &self,
        nr_type: RegulationType,
    ) -> Result<Vec<SafetyRecord>, DomainError> {
        let mut items: Vec<SafetyRecord> = self
            .cache
            .load(keys::SAFETY, Vec::new)
            .await
            .map_err(cache_error)?;
        items.retain(|r| r.nr_type == nr_type);
        items.sort_by_key(|r| r.next_inspection);
        Ok(items)
    }

    async fn insert(&self, draft: NewSafetyRecord) -> Result<SafetyRecord, DomainError> {
        let record = draft.into_record(new_local_id());
        let stored = record.clone();
        self.cache
            .update(keys::SAFETY, Vec::new, |items: &mut Vec<SafetyRecord>| {
                items.push(stored)
            })
            .await
            .map_err(cache_error)?;
        Ok(record)
    }

    async fn save(&self, record: &SafetyRecord) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::SAFETY, Vec::new, |items: &mut Vec<SafetyRecord>| {
                replace(items, record.clone(), |r| r.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Safety record", &record.id, hit)
    }

    async fn save_all(&self, incoming: &[SafetyRecord]) -> Result<(), DomainError> {
        self.cache
            .update(keys::SAFETY, Vec::new, |items: &mut Vec<SafetyRecord>| {
                for record in incoming {
                    upsert(items, record.clone(), |r| r.id.as_str());
                }
            })
            .await
            .map_err(cache_error)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let hit = self
            .cache
            .update(keys::SAFETY, Vec::new, |items: &mut Vec<SafetyRecord>| {
                remove(items, id, |r| r.id.as_str())
            })
            .await
            .map_err(cache_error)?;
        found("Safety record", id, hit)
    }
}
