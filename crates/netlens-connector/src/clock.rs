//! Wall-clock helper.

use std::time::{SystemTime, UNIX_EPOCH};

use netlens_types::TimestampMs;

/// Milliseconds since the Unix epoch. A clock set before 1970 reads as 0.
pub fn now_ms() -> TimestampMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as TimestampMs)
        .unwrap_or(0)
}
