//! Portal Kernel - Foundational types for the insurance portal client
//!
//! This crate provides the building blocks shared by all portal domains:
//! - Numeric entity identifiers with type-safe newtype wrappers
//! - The four-phase fetch status tracked by every state slice
//! - Day-window temporal math for renewal reminders

pub mod fetch;
pub mod identifiers;
pub mod temporal;

pub use fetch::FetchStatus;
pub use identifiers::{ClaimId, PolicyId, UserId};
pub use temporal::{days_until, MILLIS_PER_DAY};
