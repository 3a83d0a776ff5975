use super::{ReservationCategory, ScaffoldingType, TimeSlot};
use crate::clock::{format_date, format_time, hhmm};
use crate::error::{DomainError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A booked time slot for one resource on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default)]
    pub id: String,
    pub resource_id: String,
    /// Display name captured at booking time
    pub resource_name: String,
    #[serde(rename = "type")]
    pub category: ReservationCategory,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub requester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaffolding_type: Option<ScaffoldingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_saved: Option<f64>,
}

impl Reservation {
    /// `[start_time, end_time)` intersects `slot`.
    ///
    /// Works on the raw times so records that predate range validation still
    /// take part in conflict checks.
    pub fn overlaps(&self, slot: &TimeSlot) -> bool {
        slot.start() < self.end_time && slot.end() > self.start_time
    }

    pub fn slot(&self) -> Result<TimeSlot> {
        TimeSlot::new(self.start_time, self.end_time)
    }

    /// Error reported when a new booking collides with this one.
    pub fn conflict_error(&self) -> DomainError {
        DomainError::ReservationConflict {
            resource_id: self.resource_id.clone(),
            date: format_date(self.date),
            start: format_time(self.start_time),
            end: format_time(self.end_time),
            existing_id: self.id.clone(),
        }
    }

    /// Booked hours; zero for malformed ranges
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_minutes().max(0) as f64 / 60.0
    }
}

/// A reservation request before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReservation {
    pub resource_id: String,
    pub resource_name: String,
    #[serde(rename = "type")]
    pub category: ReservationCategory,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub requester: String,
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default)]
    pub scaffolding_type: Option<ScaffoldingType>,
    #[serde(default)]
    pub cost_saved: Option<f64>,
}

impl NewReservation {
    pub fn slot(&self) -> Result<TimeSlot> {
        TimeSlot::new(self.start_time, self.end_time)
    }

    pub fn into_reservation(self, id: impl Into<String>) -> Reservation {
        Reservation {
            id: id.into(),
            resource_id: self.resource_id,
            resource_name: self.resource_name,
            category: self.category,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            requester: self.requester,
            observation: self.observation,
            scaffolding_type: self.scaffolding_type,
            cost_saved: self.cost_saved,
        }
    }
}
