//! Infrastructure layer - Remote database, local cache and configuration

pub mod cache;
pub mod config;
pub mod database;

pub use cache::{
    CachedEquipmentBlacklist, CachedEquipmentRepository, CachedMaintenanceRepository,
    CachedReservationRepository, CachedSafetyRepository, LocalCache,
};
pub use config::AppConfig;
pub use database::{
    SeaOrmEquipmentRepository, SeaOrmMaintenanceRepository, SeaOrmReservationRepository,
    SeaOrmSafetyRepository,
};
