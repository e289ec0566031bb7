//! Day-window temporal math
//!
//! Renewal reminders count whole days remaining until a policy's end date,
//! rounding any partial day up. The end date is anchored at midnight UTC,
//! matching how the portal's REST API renders bare dates.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days remaining until `end_date`, rounded up.
///
/// A policy expiring later today yields 0; one expiring any time tomorrow
/// yields 1. Past dates yield negative values.
pub fn days_until(end_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let end = Utc.from_utc_datetime(&end_date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
    let millis = (end - now).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) > 0)
}
