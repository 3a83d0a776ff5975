mod compliance;
mod entity;
mod repository;

pub use compliance::{ATTENTION_WINDOW_DAYS, ComplianceStatus, RegulationType};
pub use entity::{NewSafetyRecord, SafetyRecord};
pub use repository::SafetyRepository;
