//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Equipment, Reservation, MaintenanceOrder, SafetyRecord)
//! - Value Objects (TimeSlot, categories and statuses)
//! - Scheduling rules (overlap detection, compliance, usage report)
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod clock;
pub mod equipment;
pub mod error;
pub mod maintenance;
pub mod report;
pub mod reservation;
pub mod safety;

// Re-export commonly used types
pub use equipment::{Equipment, EquipmentType, NewEquipment};
pub use error::DomainError;
pub use maintenance::{MaintenanceOrder, MaintenanceStatus, MaintenanceType, NewMaintenanceOrder};
pub use reservation::{NewReservation, Reservation, ReservationCategory, TimeSlot};
pub use safety::{ComplianceStatus, NewSafetyRecord, RegulationType, SafetyRecord};
