use chrono::{Duration, NaiveTime};

/// Bookable day runs 08:00–23:00.
pub const OPENING_HOUR: u32 = 8;
pub const CLOSING_HOUR: u32 = 23;

/// Gaps shorter than this are not offered as free slots.
pub const MIN_SLOT_MINUTES: i64 = 60;

pub fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(OPENING_HOUR, 0, 0).unwrap()
}

pub fn closing_time() -> NaiveTime {
    NaiveTime::from_hms_opt(CLOSING_HOUR, 0, 0).unwrap()
}

pub fn min_slot_duration() -> Duration {
    Duration::minutes(MIN_SLOT_MINUTES)
}
