//! DateTime display utilities.
//!
//! Timestamps are stored in UTC and shown in the system time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a start/end pair as a single range.
///
/// When both ends fall on the same local day the date is only printed once:
/// `2024-03-04 08:00 to 09:00 CET`.
pub struct LocalTimeRange<'a> {
    pub start: &'a Timestamp,
    pub end: &'a Timestamp,
}

impl fmt::Display for LocalTimeRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tz = TimeZone::system();
        let start = self.start.to_zoned(tz.clone());
        let end = self.end.to_zoned(tz);

        if start.date() == end.date() {
            write!(
                f,
                "{} to {}",
                start.strftime("%Y-%m-%d %H:%M"),
                end.strftime("%H:%M %Z")
            )
        } else {
            write!(
                f,
                "{} to {}",
                start.strftime("%Y-%m-%d %H:%M"),
                end.strftime("%Y-%m-%d %H:%M %Z")
            )
        }
    }
}
