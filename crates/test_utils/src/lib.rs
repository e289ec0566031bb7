//! Test Utilities Crate
//!
//! Shared fixtures and builders for the insurance portal test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built users, timestamps, and seed data
//! - `builders`: Builder patterns for policies and claims with sensible
//!   defaults

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
