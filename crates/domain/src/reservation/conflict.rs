use super::{Reservation, TimeSlot, scaffolding_resource_id};
use chrono::NaiveDate;

/// Scaffolding locations are free text, so ids are also compared in their
/// normalized form ("Boiler Room" and "boiler-room" are one resource).
fn same_resource(a: &str, b: &str) -> bool {
    a == b || scaffolding_resource_id(a) == scaffolding_resource_id(b)
}

/// First reservation that would collide with booking `slot` for `resource_id`
/// on `date`. `exclude_id` skips the reservation being rescheduled.
pub fn find_conflict<'a>(
    existing: &'a [Reservation],
    resource_id: &str,
    date: NaiveDate,
    slot: &TimeSlot,
    exclude_id: Option<&str>,
) -> Option<&'a Reservation> {
    existing.iter().find(|res| {
        if exclude_id == Some(res.id.as_str()) {
            return false;
        }
        same_resource(&res.resource_id, resource_id) && res.date == date && res.overlaps(slot)
    })
}
