//! Near-expiry policy selection

use chrono::{DateTime, Utc};

use crate::policy::Policy;

/// Default forward-looking renewal window, in days
pub const DEFAULT_RENEWAL_WINDOW_DAYS: i64 = 30;

/// Selects policies whose end date falls within the renewal window.
///
/// A policy is included iff `0 < days_left <= window_days`. A policy
/// expiring today (`days_left == 0`) is excluded; one expiring exactly at
/// the window boundary is included.
pub fn policies_near_expiry(
    policies: &[Policy],
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<&Policy> {
    policies
        .iter()
        .filter(|policy| {
            let days_left = policy.days_left(now);
            days_left > 0 && days_left <= window_days
        })
        .collect()
}
