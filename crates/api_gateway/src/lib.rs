//! Remote-Data Gateway
//!
//! This crate bridges the portal core to its JSON REST backend. The
//! `PortalApi` trait is the port the store depends on; `RestGateway` is the
//! production adapter over reqwest, and an in-memory `MockPortalApi` (behind
//! the `mock` feature) backs the test suites.
//!
//! The gateway trusts the backend's JSON shape and surfaces every failure as
//! a `GatewayError`; no structured error code crosses the port beyond the
//! not-found distinction the store needs for its detail fetches.

pub mod config;
pub mod error;
pub mod ports;
pub mod rest;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use ports::PortalApi;
pub use rest::RestGateway;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPortalApi;
