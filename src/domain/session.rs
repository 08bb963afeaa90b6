//! Futures trading-session calendar.
//!
//! The session closes daily for a one-hour maintenance break at 22:00, all
//! of Saturday, from 22:00 on Friday, and on Sunday from 01:00 until the
//! 23:00 reopen. Hours are read in the calendar's reference timezone.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;

const MAINTENANCE_START_HOUR: u32 = 22;
const MAINTENANCE_END_HOUR: u32 = 23;
const FRIDAY_CLOSE_HOUR: u32 = 22;
const SUNDAY_REOPEN_HOUR: u32 = 23;

/// Returns true if the futures session is closed at `t`.
///
/// Uses the hour and weekday of `t` in its own timezone.
#[must_use]
pub fn is_session_closed<Z: TimeZone>(t: &DateTime<Z>) -> bool {
    let hour = t.hour();

    if (MAINTENANCE_START_HOUR..MAINTENANCE_END_HOUR).contains(&hour) {
        return true;
    }

    match t.weekday() {
        Weekday::Sat => true,
        Weekday::Fri => hour >= FRIDAY_CLOSE_HOUR,
        // Hour 0 on Sunday is open.
        Weekday::Sun => hour > 0 && hour < SUNDAY_REOPEN_HOUR,
        _ => false,
    }
}

/// Session calendar bound to a reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCalendar {
    timezone: Tz,
}

impl SessionCalendar {
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns true if the session is closed at the UTC instant `at`.
    #[must_use]
    pub fn is_closed_at(&self, at: DateTime<Utc>) -> bool {
        is_session_closed(&at.with_timezone(&self.timezone))
    }
}

impl Default for SessionCalendar {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}
