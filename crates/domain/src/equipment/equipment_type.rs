use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of schedulable equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Machine,
    Tool,
    Vehicle,
    /// Refrigeration chambers and other bookable floor areas
    Area,
    /// Steam lines (Armstrong traps)
    Steam,
    Electrical,
    PressureVessel,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Machine => "machine",
            Self::Tool => "tool",
            Self::Vehicle => "vehicle",
            Self::Area => "area",
            Self::Steam => "steam",
            Self::Electrical => "electrical",
            Self::PressureVessel => "pressure_vessel",
        }
    }
}

impl FromStr for EquipmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "machine" => Ok(Self::Machine),
            "tool" => Ok(Self::Tool),
            "vehicle" => Ok(Self::Vehicle),
            "area" => Ok(Self::Area),
            "steam" => Ok(Self::Steam),
            "electrical" => Ok(Self::Electrical),
            "pressure_vessel" => Ok(Self::PressureVessel),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown equipment type: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
