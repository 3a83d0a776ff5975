mod equipment_repository;
mod maintenance_repository;
mod reservation_repository;
mod safety_repository;

pub mod entities;

pub use equipment_repository::SeaOrmEquipmentRepository;
pub use maintenance_repository::SeaOrmMaintenanceRepository;
pub use reservation_repository::SeaOrmReservationRepository;
pub use safety_repository::SeaOrmSafetyRepository;
pub use sea_orm::DatabaseConnection;

use domain::DomainError;
use sea_orm::{ConnectOptions, Database, DbErr};
use std::time::Duration;

/// Open the remote relational store.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    Ok(Database::connect(options).await?)
}

/// Remote rows are keyed by integer; anything else was minted offline.
pub(crate) fn parse_id(id: &str) -> Result<i32, DomainError> {
    id.trim()
        .parse::<i32>()
        .map_err(|_| DomainError::InvalidId(format!("Not a remote id: {id}")))
}

pub(crate) fn db_error(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {e}"))
}

/// `update` on a missing row surfaces as `RecordNotUpdated`
pub(crate) fn update_error(entity: &'static str, id: &str, e: DbErr) -> DomainError {
    match e {
        DbErr::RecordNotUpdated => DomainError::not_found(entity, id),
        other => db_error(other),
    }
}
