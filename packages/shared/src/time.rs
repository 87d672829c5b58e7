//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, FixedOffset};

/// Offset of the room's wall clock (KST, UTC+9) in seconds.
const ROOM_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        get_timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Get current Unix timestamp (milliseconds)
pub fn get_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to RFC 3339 in the room's time zone.
///
/// Out-of-range timestamps are rendered as the raw millisecond value.
pub fn timestamp_to_room_rfc3339(timestamp_millis: i64) -> String {
    let Some(offset) = FixedOffset::east_opt(ROOM_UTC_OFFSET_SECS) else {
        return timestamp_millis.to_string();
    };

    match DateTime::from_timestamp_millis(timestamp_millis) {
        Some(utc) => utc.with_timezone(&offset).to_rfc3339(),
        None => timestamp_millis.to_string(),
    }
}
