use super::{MaintenanceStatus, MaintenanceType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A repair ticket for a motor or electronic board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceOrder {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub item_name: String,
    pub description: String,
    pub status: MaintenanceStatus,
    /// Money saved by repairing in-house instead of outsourcing
    pub cost_saved: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    pub entry_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
}

impl MaintenanceOrder {
    /// Move to `status`. Completing stamps `today` as the completion date;
    /// reopening clears it.
    pub fn transition(&mut self, status: MaintenanceStatus, today: NaiveDate) {
        self.status = status;
        self.completion_date = if status.is_closed() {
            Some(today)
        } else {
            None
        };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenanceOrder {
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub cost_saved: f64,
    #[serde(default)]
    pub technician: Option<String>,
    /// Defaults to the day the order is registered
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
}

impl NewMaintenanceOrder {
    pub fn into_order(self, id: impl Into<String>, today: NaiveDate) -> MaintenanceOrder {
        let mut order = MaintenanceOrder {
            id: id.into(),
            kind: self.kind,
            item_name: self.item_name,
            description: self.description,
            status: self.status,
            cost_saved: self.cost_saved,
            technician: self.technician,
            entry_date: self.entry_date.unwrap_or(today),
            completion_date: None,
        };
        if order.status.is_closed() {
            order.completion_date = Some(today);
        }
        order
    }
}
