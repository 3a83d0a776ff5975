mod category;
mod conflict;
mod entity;
mod repository;
mod time_slot;

pub use category::{ReservationCategory, ScaffoldingType, resource_key, scaffolding_resource_id};
pub use conflict::find_conflict;
pub use entity::{NewReservation, Reservation};
pub use repository::ReservationRepository;
pub use time_slot::TimeSlot;
