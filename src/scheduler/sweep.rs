use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::model::{Booking, BookingStatus};
use crate::repo::BookingRepository;

/// Lazy expiration: flip every elapsed booking to no-actual and persist the
/// single-field change, before the caller sees the set.
///
/// Applied by every read-returning operation. A persist failure is surfaced
/// in the log but never fails the read that triggered it; the returned
/// booking still carries the swept status. Re-running over an already-swept
/// set is a no-op.
pub async fn sweep_elapsed(
    repo: &dyn BookingRepository,
    bookings: &mut [Booking],
    now: NaiveDateTime,
) {
    for booking in bookings {
        if booking.status == BookingStatus::NoActual || !booking.has_elapsed(now) {
            continue;
        }
        if booking.try_transition(BookingStatus::NoActual) {
            debug!("booking {} elapsed, marked no-actual", booking.id);
            if let Err(e) = repo.mark_no_actual(booking.id).await {
                warn!("failed to persist expiry of booking {}: {e}", booking.id);
            }
        }
    }
}
