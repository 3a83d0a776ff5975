pub mod equipment;
pub mod maintenance_orders;
pub mod reservations;
pub mod safety_records;
