//! Booking scheduling core: interval overlap, free-slot computation within
//! working hours, a booking status state machine, and lazy expiration of
//! elapsed reservations. Persistence and reference data stay behind the
//! traits in [`repo`].

pub mod limits;
pub mod model;
pub mod repo;
pub mod scheduler;

pub use model::{Booking, BookingId, BookingStatus, Package, TimeSlot, Zone};
pub use scheduler::{BookingError, CreateBooking, Scheduler, UpdateBooking};
