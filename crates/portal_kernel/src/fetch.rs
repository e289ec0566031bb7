//! Fetch status for async request lifecycles
//!
//! Every state slice tracks exactly one status at a time. `Loading` is
//! re-enterable from either terminal state when a fetch is re-dispatched;
//! there is no automatic retry.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a slice's most recent async operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No operation dispatched yet, or state was explicitly reset
    #[default]
    Idle,
    /// An operation is in flight
    Loading,
    /// The last operation committed its payload
    Succeeded,
    /// The last operation was rejected; the reason is stored on the slice
    Failed,
}

impl FetchStatus {
    /// Whether an operation is currently in flight
    pub fn is_loading(self) -> bool {
        self == FetchStatus::Loading
    }

    /// Whether the slice has settled (succeeded or failed)
    pub fn is_settled(self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }

    #[test]
    fn test_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&FetchStatus::Succeeded).unwrap(),
            "\"succeeded\""
        );
    }

    #[test]
    fn test_settled_states() {
        assert!(FetchStatus::Succeeded.is_settled());
        assert!(FetchStatus::Failed.is_settled());
        assert!(!FetchStatus::Loading.is_settled());
        assert!(!FetchStatus::Idle.is_settled());
    }
}
