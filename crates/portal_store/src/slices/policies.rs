//! Policies slice

use domain_policy::Policy;
use portal_kernel::FetchStatus;

/// Policies slice state
///
/// The list is replaced wholesale on each successful list fetch; the detail
/// entity lives independently of the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoliciesState {
    /// The user's policy collection
    pub policies: Vec<Policy>,
    /// Detail-view focus, cleared on navigation away and on each new detail
    /// fetch so stale data never shows under a new identifier
    pub current_policy: Option<Policy>,
    /// Lifecycle status of the latest policy operation
    pub status: FetchStatus,
    /// Reason of the latest rejection, if any
    pub error: Option<String>,
}

/// Legal mutations of the policies slice
#[derive(Debug, Clone, PartialEq)]
pub enum PoliciesAction {
    /// Navigation away from the detail view
    ClearCurrentPolicy,
    FetchPoliciesPending,
    FetchPoliciesFulfilled(Vec<Policy>),
    FetchPoliciesRejected(String),
    FetchPolicyPending,
    FetchPolicyFulfilled(Policy),
    FetchPolicyRejected(String),
}

/// Pure reducer for the policies slice
pub fn reduce(mut state: PoliciesState, action: PoliciesAction) -> PoliciesState {
    match action {
        PoliciesAction::ClearCurrentPolicy => {
            state.current_policy = None;
            state.error = None;
            state.status = FetchStatus::Idle;
        }
        PoliciesAction::FetchPoliciesPending => {
            state.status = FetchStatus::Loading;
            state.error = None;
        }
        PoliciesAction::FetchPoliciesFulfilled(policies) => {
            state.status = FetchStatus::Succeeded;
            state.policies = policies;
        }
        PoliciesAction::FetchPolicyPending => {
            state.status = FetchStatus::Loading;
            state.error = None;
            state.current_policy = None;
        }
        PoliciesAction::FetchPolicyFulfilled(policy) => {
            state.status = FetchStatus::Succeeded;
            state.current_policy = Some(policy);
        }
        PoliciesAction::FetchPoliciesRejected(reason)
        | PoliciesAction::FetchPolicyRejected(reason) => {
            state.status = FetchStatus::Failed;
            state.error = Some(reason);
        }
    }
    state
}
