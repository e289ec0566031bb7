//! Policy Domain
//!
//! Read-side policy model for the portal client. Policies are owned by a
//! user and never mutated client-side; this crate holds the entity plus the
//! pure projections the dashboard and renewal views are built from:
//!
//! - **Near-expiry selection**: policies whose end date falls inside a
//!   forward-looking day window
//! - **Premium analytics**: monthly premium aggregates and the per-type
//!   distribution

pub mod analytics;
pub mod expiry;
pub mod policy;

pub use analytics::{
    distribution_by_type, premium_summary, premiums_by_month, MonthlyPremium, PremiumSummary,
    TypeDistribution,
};
pub use expiry::{policies_near_expiry, DEFAULT_RENEWAL_WINDOW_DAYS};
pub use policy::{Policy, PolicyStatus, PolicyType};
