mod entity;
mod repository;
mod status;

pub use entity::{MaintenanceOrder, NewMaintenanceOrder};
pub use repository::MaintenanceRepository;
pub use status::{MaintenanceStatus, MaintenanceType};
