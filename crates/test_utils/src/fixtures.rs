//! Pre-built test data

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use domain_auth::User;
use portal_kernel::UserId;

/// Fixed "now" used across the suite: 2024-06-15T00:00:00Z
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
}

/// Shorthand for a calendar date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The default portal user (id 1)
pub fn portal_user() -> User {
    User {
        id: UserId::new(1),
        username: "jdoe".to_string(),
        name: "Jane Doe".to_string(),
    }
}

/// A second user, for cross-ownership scenarios
pub fn other_user() -> User {
    User {
        id: UserId::new(9),
        username: "other".to_string(),
        name: "Other User".to_string(),
    }
}
