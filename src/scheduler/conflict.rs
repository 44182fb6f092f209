use crate::model::{Booking, TimeSlot};

/// Admissibility predicate for a proposed slot against the bookings already
/// on that date.
///
/// Cancelled and no-actual bookings never occupy a slot and are ignored.
/// The predicate fails closed: an empty active set yields `false`, so a
/// caller that wants "whole day open" to pass must special-case zero
/// bookings itself (the orchestrator does). This asymmetry is the inherited
/// contract; see DESIGN.md before changing it.
pub fn is_free(slot: &TimeSlot, existing_on_date: &[Booking]) -> bool {
    let mut saw_active = false;
    for booking in existing_on_date {
        if !booking.is_active() || booking.slot.date != slot.date {
            continue;
        }
        saw_active = true;
        if booking.slot.overlaps(slot) {
            return false;
        }
    }
    saw_active
}
