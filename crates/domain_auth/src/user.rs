//! Portal users and credential request types

use serde::{Deserialize, Serialize};

use portal_kernel::UserId;

/// A registered portal user
///
/// Created at signup (or seeded in the backing API) and immutable from the
/// client's perspective thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
}

/// Credentials presented at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Payload for creating a new user at signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
}
