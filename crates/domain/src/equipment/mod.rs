mod entity;
mod equipment_type;
mod repository;

pub use entity::{Equipment, NewEquipment, seed_equipment};
pub use equipment_type::EquipmentType;
pub use repository::{EquipmentBlacklist, EquipmentRepository};
