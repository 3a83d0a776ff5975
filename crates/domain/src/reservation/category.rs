use crate::equipment::EquipmentType;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which shop schedule a reservation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationCategory {
    Workshop,
    Scaffolding,
    Refrigeration,
    /// CNC machining (REC)
    Machining,
    /// Steam line service
    Armstrong,
}

impl ReservationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Scaffolding => "scaffolding",
            Self::Refrigeration => "refrigeration",
            Self::Machining => "machining",
            Self::Armstrong => "armstrong",
        }
    }

    /// Whether equipment of `kind` can be booked on this schedule.
    ///
    /// Scaffolding books free-text locations, never equipment.
    pub fn accepts(&self, kind: EquipmentType) -> bool {
        match self {
            Self::Workshop => matches!(kind, EquipmentType::Machine | EquipmentType::Tool),
            Self::Refrigeration => kind == EquipmentType::Area,
            Self::Armstrong => kind == EquipmentType::Steam,
            Self::Machining => kind == EquipmentType::Machine,
            Self::Scaffolding => false,
        }
    }
}

impl FromStr for ReservationCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "workshop" => Ok(Self::Workshop),
            "scaffolding" => Ok(Self::Scaffolding),
            "refrigeration" => Ok(Self::Refrigeration),
            "machining" => Ok(Self::Machining),
            "armstrong" => Ok(Self::Armstrong),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown reservation category: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ReservationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scaffolding crew job kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaffoldingType {
    Assembly,
    Disassembly,
}

impl ScaffoldingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assembly => "assembly",
            Self::Disassembly => "disassembly",
        }
    }
}

impl FromStr for ScaffoldingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "assembly" => Ok(Self::Assembly),
            "disassembly" => Ok(Self::Disassembly),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown scaffolding type: {other}"
            ))),
        }
    }
}

/// Resource id for a scaffolding location: lower-cased, whitespace runs replaced by `-`.
///
/// Two crews asking for "Boiler Room" and "boiler room" end up on the same resource.
pub fn scaffolding_resource_id(location: &str) -> String {
    location
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Resource id a reservation is stored under: scaffolding locations are
/// normalized, equipment ids are kept as given.
pub fn resource_key(category: ReservationCategory, resource_id: &str) -> String {
    match category {
        ReservationCategory::Scaffolding => scaffolding_resource_id(resource_id),
        _ => resource_id.trim().to_string(),
    }
}
