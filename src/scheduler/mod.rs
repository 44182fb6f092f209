mod conflict;
mod error;
mod slots;
mod sweep;

pub use conflict::is_free;
pub use error::BookingError;
pub use slots::free_slots;
pub use sweep::sweep_elapsed;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use ulid::Ulid;

use crate::model::*;
use crate::repo::{BookingRepository, PackageDirectory, ZoneDirectory};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parse the textual date/time triple used by the request boundary.
/// Fails before any collaborator lookup happens.
fn parse_slot(date: &str, start: &str, end: &str) -> Result<TimeSlot, BookingError> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| BookingError::InvalidDateTime(date.to_string()))?;
    let start = NaiveTime::parse_from_str(start, TIME_FORMAT)
        .map_err(|_| BookingError::InvalidDateTime(start.to_string()))?;
    let end = NaiveTime::parse_from_str(end, TIME_FORMAT)
        .map_err(|_| BookingError::InvalidDateTime(end.to_string()))?;
    if start >= end {
        return Err(BookingError::InvalidSlot("start must be before end"));
    }
    Ok(TimeSlot::new(date, start, end))
}

/// A new reservation request. Date and times arrive as text in a fixed
/// calendar format (`2026-06-01`, `14:30`).
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub zone_id: ZoneId,
    pub user_id: UserId,
    pub package_id: PackageId,
    pub date: String,
    pub start: String,
    pub end: String,
}

/// Mutable fields of an existing booking. Date and times must match the
/// stored slot; they only identify it.
#[derive(Debug, Clone)]
pub struct UpdateBooking {
    pub id: BookingId,
    pub package_id: PackageId,
    pub party_size: u32,
    pub date: String,
    pub start: String,
    pub end: String,
}

/// Composes the conflict checker, free-slot calculator, state machine and
/// expiration sweep over the host's collaborators. Request-scoped: every
/// operation reads, computes and writes, holding no state of its own.
pub struct Scheduler {
    bookings: Arc<dyn BookingRepository>,
    zones: Arc<dyn ZoneDirectory>,
    packages: Arc<dyn PackageDirectory>,
}

impl Scheduler {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        zones: Arc<dyn ZoneDirectory>,
        packages: Arc<dyn PackageDirectory>,
    ) -> Self {
        Self {
            bookings,
            zones,
            packages,
        }
    }

    /// Reserve a slot. The new booking starts out temporary-reserved with
    /// the party size defaulted to the zone's capacity.
    pub async fn create(&self, req: CreateBooking) -> Result<BookingId, BookingError> {
        let slot = parse_slot(&req.date, &req.start, &req.end)?;

        let zone = self
            .zones
            .get_by_id(&req.zone_id)
            .await?
            .ok_or_else(|| BookingError::ZoneNotFound(req.zone_id.clone()))?;
        self.packages
            .get_by_id(&req.package_id)
            .await?
            .ok_or_else(|| BookingError::PackageNotFound(req.package_id.clone()))?;

        // One booking per user, zone and date — any time, any status.
        let prior = self
            .bookings
            .get_by_user_and_zone(&req.user_id, &req.zone_id)
            .await?;
        if prior.iter().any(|b| b.slot.date == slot.date) {
            return Err(BookingError::BookingAlreadyExists {
                user_id: req.user_id,
                zone_id: req.zone_id,
                date: slot.date,
            });
        }

        // The conflict scope is every booking on the date, across all zones.
        // A date with no bookings at all is open; the checker itself fails
        // closed on an empty set (see conflict.rs).
        let on_date: Vec<Booking> = self
            .bookings
            .get_all()
            .await?
            .into_iter()
            .filter(|b| b.slot.date == slot.date)
            .collect();
        if !on_date.is_empty() && !is_free(&slot, &on_date) {
            return Err(BookingError::BookingConflict {
                date: slot.date,
                start: slot.start,
                end: slot.end,
            });
        }

        let booking = Booking {
            id: Ulid::new(),
            zone_id: req.zone_id,
            user_id: req.user_id,
            package_id: req.package_id,
            party_size: zone.capacity_limit,
            status: BookingStatus::TemporaryReserved,
            slot,
        };
        let id = booking.id;
        self.bookings.insert(booking).await?;
        Ok(id)
    }

    /// Drive the booking through the state machine. A rejected transition
    /// leaves the stored record untouched.
    pub async fn change_status(
        &self,
        id: BookingId,
        requested: BookingStatus,
    ) -> Result<(), BookingError> {
        let mut booking = self.load(id).await?;
        let from = booking.status;
        if !booking.try_transition(requested) {
            return Err(BookingError::InvalidStatusTransition {
                id,
                from,
                requested,
            });
        }
        self.bookings.update(booking).await
    }

    /// Update the mutable fields. Date and times are immutable; the party
    /// size is re-checked against the zone's current capacity.
    pub async fn update(&self, req: UpdateBooking) -> Result<(), BookingError> {
        let slot = parse_slot(&req.date, &req.start, &req.end)?;

        let stored = self
            .bookings
            .get_by_id(req.id)
            .await?
            .ok_or(BookingError::BookingNotFound(req.id))?;
        let zone = self
            .zones
            .get_by_id(&stored.zone_id)
            .await?
            .ok_or_else(|| BookingError::ZoneNotFound(stored.zone_id.clone()))?;

        if req.party_size == 0 {
            return Err(BookingError::InvalidPartySize);
        }
        if req.party_size > zone.capacity_limit {
            return Err(BookingError::BookingExceedsLimit {
                requested: req.party_size,
                capacity: zone.capacity_limit,
            });
        }
        if slot != stored.slot {
            return Err(BookingError::BookingImmutableFieldChanged(req.id));
        }

        let updated = Booking {
            package_id: req.package_id,
            party_size: req.party_size,
            ..stored
        };
        self.bookings.update(updated).await
    }

    /// Delete outright, whatever the status.
    pub async fn remove(&self, id: BookingId) -> Result<(), BookingError> {
        if self.bookings.get_by_id(id).await?.is_none() {
            return Err(BookingError::BookingNotFound(id));
        }
        self.bookings.delete(id).await
    }

    // ── Read paths — every one applies the expiration sweep ──────

    pub async fn get(&self, id: BookingId) -> Result<Booking, BookingError> {
        self.load(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>, BookingError> {
        let mut all = self.bookings.get_all().await?;
        sweep_elapsed(self.bookings.as_ref(), &mut all, now()).await;
        Ok(all)
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        let mut found = self.bookings.get_by_user(user_id).await?;
        sweep_elapsed(self.bookings.as_ref(), &mut found, now()).await;
        Ok(found)
    }

    pub async fn list_by_zone(&self, zone_id: &str) -> Result<Vec<Booking>, BookingError> {
        let mut found = self.bookings.get_by_zone(zone_id).await?;
        sweep_elapsed(self.bookings.as_ref(), &mut found, now()).await;
        Ok(found)
    }

    /// Free slots of at least an hour within working hours for a zone/date.
    pub async fn free_slots(
        &self,
        date: NaiveDate,
        zone_id: &str,
    ) -> Result<Vec<TimeSlot>, BookingError> {
        let mut zone_bookings = self.bookings.get_by_zone(zone_id).await?;
        sweep_elapsed(self.bookings.as_ref(), &mut zone_bookings, now()).await;
        Ok(slots::free_slots(date, &zone_bookings))
    }

    async fn load(&self, id: BookingId) -> Result<Booking, BookingError> {
        let booking = self
            .bookings
            .get_by_id(id)
            .await?
            .ok_or(BookingError::BookingNotFound(id))?;
        let mut single = [booking];
        sweep_elapsed(self.bookings.as_ref(), &mut single, now()).await;
        let [booking] = single;
        Ok(booking)
    }
}
