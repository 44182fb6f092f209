use chrono::NaiveDate;

use crate::limits;
use crate::model::{Booking, TimeSlot};

/// Compute the free slots of at least the minimum duration within working
/// hours, given a zone's bookings.
///
/// Only active bookings on `date` participate. Gaps are emitted before the
/// first booking, between consecutive bookings, and after the last one.
/// A date with zero active bookings yields no slots — the inherited rule,
/// preserved deliberately (see DESIGN.md).
pub fn free_slots(date: NaiveDate, bookings: &[Booking]) -> Vec<TimeSlot> {
    let mut active: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.is_active() && b.slot.date == date)
        .collect();
    active.sort_by_key(|b| b.slot.start);

    let open = limits::opening_time();
    let close = limits::closing_time();
    let min = limits::min_slot_duration();

    let mut slots = Vec::new();
    let mut cursor = open;
    for booking in &active {
        if booking.slot.start > cursor && booking.slot.start - cursor >= min {
            slots.push(TimeSlot::new(date, cursor, booking.slot.start));
        }
        cursor = cursor.max(booking.slot.end);
    }
    if !active.is_empty() && close > cursor && close - cursor >= min {
        slots.push(TimeSlot::new(date, cursor, close));
    }

    // Already in order by construction; the sort keeps the contract explicit.
    slots.sort_by_key(|s| s.start);
    slots
}
