//! Facility store - remote-first persistence with a local cache fallback.
//!
//! Every operation goes to the remote database when one is configured. A
//! storage failure, or an id the remote never issued (records created while
//! offline), is logged and the same operation is replayed against the local
//! cache. Any other remote answer, such as `NotFound` or a conflict, is
//! returned as is. Successful remote results are mirrored into the cache
//! (best-effort) so a later fallback sees the last known state. Nothing is
//! ever synchronized back to the remote.

mod equipment;
mod maintenance;
mod reservations;
mod safety;

use domain::DomainError;
use domain::equipment::{EquipmentBlacklist, EquipmentRepository};
use domain::maintenance::MaintenanceRepository;
use domain::reservation::ReservationRepository;
use domain::safety::SafetyRepository;
use infrastructure::cache::{
    CachedEquipmentBlacklist, CachedEquipmentRepository, CachedMaintenanceRepository,
    CachedReservationRepository, CachedSafetyRepository, LocalCache,
};
use infrastructure::database::{
    DatabaseConnection, SeaOrmEquipmentRepository, SeaOrmMaintenanceRepository,
    SeaOrmReservationRepository, SeaOrmSafetyRepository,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One complete set of repositories (either the remote or the local side).
#[derive(Clone)]
pub struct Backend {
    pub equipment: Arc<dyn EquipmentRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub maintenance: Arc<dyn MaintenanceRepository>,
    pub safety: Arc<dyn SafetyRepository>,
}

impl Backend {
    /// SeaORM repositories over the remote database.
    pub fn remote(db: DatabaseConnection) -> Self {
        Self {
            equipment: Arc::new(SeaOrmEquipmentRepository::new(db.clone())),
            reservations: Arc::new(SeaOrmReservationRepository::new(db.clone())),
            maintenance: Arc::new(SeaOrmMaintenanceRepository::new(db.clone())),
            safety: Arc::new(SeaOrmSafetyRepository::new(db)),
        }
    }

    /// Document repositories over the local key-value cache.
    pub fn local(cache: LocalCache) -> Self {
        Self {
            equipment: Arc::new(CachedEquipmentRepository::new(cache.clone())),
            reservations: Arc::new(CachedReservationRepository::new(cache.clone())),
            maintenance: Arc::new(CachedMaintenanceRepository::new(cache.clone())),
            safety: Arc::new(CachedSafetyRepository::new(cache)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    Online,
    Offline,
}

#[derive(Clone)]
pub struct FacilityStore {
    remote: Option<Backend>,
    local: Backend,
    blacklist: Arc<dyn EquipmentBlacklist>,
}

impl FacilityStore {
    pub fn new(
        remote: Option<Backend>,
        local: Backend,
        blacklist: Arc<dyn EquipmentBlacklist>,
    ) -> Self {
        let store = Self {
            remote,
            local,
            blacklist,
        };
        info!(mode = ?store.mode(), "Facility store ready");
        store
    }

    /// Store wired to the remote database with `cache` as fallback.
    pub fn connected(db: DatabaseConnection, cache: LocalCache) -> Self {
        Self::new(
            Some(Backend::remote(db)),
            Backend::local(cache.clone()),
            Arc::new(CachedEquipmentBlacklist::new(cache)),
        )
    }

    /// Store that only ever touches the local cache.
    pub fn offline(cache: LocalCache) -> Self {
        Self::new(
            None,
            Backend::local(cache.clone()),
            Arc::new(CachedEquipmentBlacklist::new(cache)),
        )
    }

    pub fn mode(&self) -> StorageMode {
        if self.remote.is_some() {
            StorageMode::Online
        } else {
            StorageMode::Offline
        }
    }
}

/// Outages and offline ids go to the cache; everything else is an answer.
fn falls_back(err: &DomainError) -> bool {
    matches!(err, DomainError::Storage(_) | DomainError::InvalidId(_))
}

fn fell_back(operation: &'static str, err: &DomainError) {
    warn!(operation, error = %err, "Remote store failed, using local cache");
}

/// Mirror failures never fail the operation that produced the data.
/// A record the cache never held is nothing to mirror.
fn mirrored(operation: &'static str, result: Result<(), DomainError>) {
    match result {
        Ok(()) | Err(DomainError::NotFound { .. }) => {}
        Err(e) => error!(operation, error = %e, "Failed to mirror remote result into local cache"),
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidValue(format!("{field} cannot be empty")));
    }
    Ok(())
}
