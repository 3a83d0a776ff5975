use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Repair bench an order belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    /// Electric motor rewinding and repair
    Motor,
    /// Electronic board repair
    Board,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motor => "motor",
            Self::Board => "board",
        }
    }
}

impl FromStr for MaintenanceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "motor" => Ok(Self::Motor),
            "board" => Ok(Self::Board),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown maintenance type: {other}"
            ))),
        }
    }
}

/// Ticket lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl FromStr for MaintenanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown maintenance status: {other}"
            ))),
        }
    }
}
