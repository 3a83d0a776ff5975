use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid time range: {start} - {end} (start must be before end)")]
    InvalidTimeRange { start: String, end: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(
        "Schedule conflict: resource {resource_id} is already booked on {date} from {start} to {end} (reservation {existing_id})"
    )]
    ReservationConflict {
        resource_id: String,
        date: String,
        start: String,
        end: String,
        existing_id: String,
    },

    #[error("Administrator password rejected")]
    Unauthorized,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
