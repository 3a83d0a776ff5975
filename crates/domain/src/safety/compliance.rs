use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inspections due within this many days are flagged for attention
pub const ATTENTION_WINDOW_DAYS: i64 = 30;

/// Brazilian regulatory norm a record is kept for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegulationType {
    /// Electrical installations
    #[serde(rename = "NR10")]
    Nr10,
    /// Boilers, pressure vessels and piping
    #[serde(rename = "NR13")]
    Nr13,
}

impl RegulationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nr10 => "NR10",
            Self::Nr13 => "NR13",
        }
    }
}

impl FromStr for RegulationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NR10" => Ok(Self::Nr10),
            "NR13" => Ok(Self::Nr13),
            _ => Err(DomainError::InvalidValue(format!(
                "Unknown regulation: {s}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    #[default]
    Compliant,
    Attention,
    Critical,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Attention => "attention",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for ComplianceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "compliant" => Ok(Self::Compliant),
            "attention" => Ok(Self::Attention),
            "critical" => Ok(Self::Critical),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown compliance status: {other}"
            ))),
        }
    }
}
