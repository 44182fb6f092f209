use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Opaque booking identity.
pub type BookingId = Ulid;

/// External references are plain identifiers owned by the host system.
pub type ZoneId = String;
pub type UserId = String;
pub type PackageId = String;

/// Half-open interval `[start, end)` on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        debug_assert!(start < end, "TimeSlot start must be before end");
        Self { date, start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Slots on different dates never overlap; same-date slots overlap on
    /// the usual half-open rule. Abutting slots (`a.end == b.start`) do not.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }

    /// The instant the slot ends, as a full timestamp.
    pub fn end_instant(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }
}

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Initial state: holds the slot pending confirmation.
    TemporaryReserved,
    Confirmed,
    Cancelled,
    /// The interval elapsed without an explicit cancellation.
    NoActual,
}

impl BookingStatus {
    /// Inactive bookings never occupy a slot.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::NoActual)
    }

    /// The transition table. `NoActual` is reachable from every other state
    /// (the expiration sweep depends on this) and is absorbing.
    /// Self-transitions are rejected.
    pub fn can_transition_to(&self, requested: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, requested),
            (TemporaryReserved, Confirmed | Cancelled | NoActual)
                | (Confirmed, Cancelled | NoActual)
                | (Cancelled, NoActual)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::TemporaryReserved => "temporary-reserved",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoActual => "no-actual",
        };
        f.write_str(s)
    }
}

/// A reservation of a zone by a user for one date/time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub zone_id: ZoneId,
    pub user_id: UserId,
    pub package_id: PackageId,
    /// Positive; capped by the zone's capacity at creation time.
    pub party_size: u32,
    pub status: BookingStatus,
    pub slot: TimeSlot,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// True once the slot's end instant has passed.
    pub fn has_elapsed(&self, now: NaiveDateTime) -> bool {
        now >= self.slot.end_instant()
    }

    /// Apply a status change if the table allows it; returns whether it did.
    /// Persistence is the caller's concern.
    pub fn try_transition(&mut self, requested: BookingStatus) -> bool {
        if self.status.can_transition_to(requested) {
            self.status = requested;
            true
        } else {
            false
        }
    }
}

/// Bookable resource, looked up through a [`crate::repo::ZoneDirectory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub capacity_limit: u32,
}

/// Existence-checked only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
}
