//! Authentication Domain
//!
//! Users, sessions, and the credential types exchanged with the portal API.
//! A session is a purely client-side construct: one per store, created by
//! login or signup and destroyed by logout.

pub mod session;
pub mod user;

pub use session::Session;
pub use user::{LoginCredentials, NewUser, User};
