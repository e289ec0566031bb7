//! Gateway error type

use thiserror::Error;

/// Error raised by gateway operations
///
/// The store reduces every variant to a per-operation reason string; only
/// the not-found distinction drives different behavior downstream.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The requested entity does not exist
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// The backend answered with a non-2xx status
    #[error("server returned status {status}")]
    Http { status: u16 },

    /// The request never completed (connection, DNS, timeout, decode)
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl GatewayError {
    pub fn not_found(entity: &'static str) -> Self {
        GatewayError::NotFound { entity }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport {
            message: err.to_string(),
        }
    }
}
