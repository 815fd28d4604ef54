#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Format a server timestamp as local wall-clock time, `HH:MM:SS`.
///
/// Accepts RFC 3339 strings as well as the naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// form the backend emits (interpreted as UTC). Unparseable input is shown
/// verbatim rather than dropped.
pub fn clock_time(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Utc
            .from_utc_datetime(&naive)
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();
    }
    timestamp.to_owned()
}
