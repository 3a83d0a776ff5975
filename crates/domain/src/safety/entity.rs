use super::{ATTENTION_WINDOW_DAYS, ComplianceStatus, RegulationType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inspection record for an NR10/NR13 asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRecord {
    #[serde(default)]
    pub id: String,
    pub nr_type: RegulationType,
    pub asset_name: String,
    #[serde(default)]
    pub description: String,
    pub last_inspection: NaiveDate,
    pub next_inspection: NaiveDate,
    pub status: ComplianceStatus,
    pub responsible: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

impl SafetyRecord {
    /// Status as of `today`: an overdue inspection is critical no matter what
    /// was recorded, and one due inside the attention window is at least
    /// attention.
    pub fn effective_status(&self, today: NaiveDate) -> ComplianceStatus {
        let days_left = (self.next_inspection - today).num_days();

        if self.status == ComplianceStatus::Critical || days_left < 0 {
            ComplianceStatus::Critical
        } else if self.status == ComplianceStatus::Attention || days_left < ATTENTION_WINDOW_DAYS
        {
            ComplianceStatus::Attention
        } else {
            ComplianceStatus::Compliant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSafetyRecord {
    pub nr_type: RegulationType,
    pub asset_name: String,
    #[serde(default)]
    pub description: String,
    pub last_inspection: NaiveDate,
    pub next_inspection: NaiveDate,
    #[serde(default)]
    pub status: ComplianceStatus,
    pub responsible: String,
    #[serde(default)]
    pub document_url: Option<String>,
}

impl NewSafetyRecord {
    pub fn into_record(self, id: impl Into<String>) -> SafetyRecord {
        SafetyRecord {
            id: id.into(),
            nr_type: self.nr_type,
            asset_name: self.asset_name,
            description: self.description,
            last_inspection: self.last_inspection,
            next_inspection: self.next_inspection,
            status: self.status,
            responsible: self.responsible,
            document_url: self.document_url,
        }
    }
}
