//! Client-side session state

use serde::{Deserialize, Serialize};

use crate::user::User;

/// The active session held by the store
///
/// Exactly one session exists per store instance. Login populates the user
/// and token; signup populates the user only (the portal API issues no token
/// at signup); logout resets everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user, if any
    pub user: Option<User>,
    /// Opaque session token minted at login
    pub token: Option<String>,
    /// Whether the session is currently authenticated
    pub is_authenticated: bool,
}

impl Session {
    /// Creates an authenticated session with a token (login)
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        }
    }

    /// Creates an authenticated session without a token (signup)
    pub fn authenticated_without_token(user: User) -> Self {
        Self {
            user: Some(user),
            token: None,
            is_authenticated: true,
        }
    }

    /// Destroys the session (logout)
    pub fn clear(&mut self) {
        *self = Session::default();
    }
}
