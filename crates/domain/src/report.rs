use crate::error::{DomainError, Result};
use crate::reservation::Reservation;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Calendar month a usage report covers, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidValue(format!(
                "Month out of range: {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for ReportMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DomainError::InvalidValue(format!("Invalid month '{s}' (expected YYYY-MM)"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl std::fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub resource_name: String,
    pub hours: f64,
    pub reservations: usize,
}

/// Booked hours per resource name within `month`, busiest first.
pub fn usage_by_resource(reservations: &[Reservation], month: ReportMonth) -> Vec<ResourceUsage> {
    let mut grouped: HashMap<&str, ResourceUsage> = HashMap::new();

    for res in reservations.iter().filter(|r| month.contains(r.date)) {
        let entry = grouped
            .entry(res.resource_name.as_str())
            .or_insert_with(|| ResourceUsage {
                resource_name: res.resource_name.clone(),
                hours: 0.0,
                reservations: 0,
            });
        entry.hours += res.duration_hours();
        entry.reservations += 1;
    }

    let mut usage: Vec<_> = grouped.into_values().collect();
    usage.sort_by(|a, b| {
        b.hours
            .total_cmp(&a.hours)
            .then_with(|| a.resource_name.cmp(&b.resource_name))
    });
    usage
}
