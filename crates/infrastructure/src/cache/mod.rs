mod local_cache;
mod repositories;

pub use local_cache::{LocalCache, keys};
pub use repositories::{
    CachedEquipmentBlacklist, CachedEquipmentRepository, CachedMaintenanceRepository,
    CachedReservationRepository, CachedSafetyRepository,
};
