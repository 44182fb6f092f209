use chrono::{NaiveDate, NaiveTime};

use crate::model::{BookingId, BookingStatus};

/// Every orchestrator outcome short of success. These are invalid-request
/// failures, not transient conditions; only `Storage` is retriable at the
/// caller's discretion.
#[derive(Debug)]
pub enum BookingError {
    BookingNotFound(BookingId),
    ZoneNotFound(String),
    PackageNotFound(String),
    /// The user already holds a booking for this zone and date.
    BookingAlreadyExists {
        user_id: String,
        zone_id: String,
        date: NaiveDate,
    },
    /// The requested interval overlaps an existing active booking.
    BookingConflict {
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
    InvalidStatusTransition {
        id: BookingId,
        from: BookingStatus,
        requested: BookingStatus,
    },
    BookingExceedsLimit {
        requested: u32,
        capacity: u32,
    },
    /// Party size is a positive integer.
    InvalidPartySize,
    /// Date, start and end are immutable after creation.
    BookingImmutableFieldChanged(BookingId),
    /// A date or time-of-day string failed the fixed-format parse.
    InvalidDateTime(String),
    InvalidSlot(&'static str),
    Storage(String),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::BookingNotFound(id) => write!(f, "booking not found: {id}"),
            BookingError::ZoneNotFound(id) => write!(f, "zone not found: {id}"),
            BookingError::PackageNotFound(id) => write!(f, "package not found: {id}"),
            BookingError::BookingAlreadyExists { user_id, zone_id, date } => {
                write!(f, "user {user_id} already booked zone {zone_id} on {date}")
            }
            BookingError::BookingConflict { date, start, end } => {
                write!(f, "interval [{start}, {end}) on {date} conflicts with an existing booking")
            }
            BookingError::InvalidStatusTransition { id, from, requested } => {
                write!(f, "booking {id}: cannot go from {from} to {requested}")
            }
            BookingError::BookingExceedsLimit { requested, capacity } => {
                write!(f, "party of {requested} exceeds zone capacity {capacity}")
            }
            BookingError::InvalidPartySize => write!(f, "party size must be positive"),
            BookingError::BookingImmutableFieldChanged(id) => {
                write!(f, "booking {id}: date and times cannot change after creation")
            }
            BookingError::InvalidDateTime(input) => write!(f, "unparseable date or time: {input}"),
            BookingError::InvalidSlot(msg) => write!(f, "invalid slot: {msg}"),
            BookingError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for BookingError {}
