//! Root state and root reducer

use crate::slices::{auth, claims, policies};
use crate::slices::auth::{AuthAction, AuthState};
use crate::slices::claims::{ClaimsAction, ClaimsState};
use crate::slices::policies::{PoliciesAction, PoliciesState};

/// The composed state of all slices
///
/// This is also the preloaded-state shape accepted by
/// [`crate::Store::with_state`] for testing and rehydration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub auth: AuthState,
    pub policies: PoliciesState,
    pub claims: ClaimsState,
}

/// Any action routed through the store
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Policies(PoliciesAction),
    Claims(ClaimsAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<PoliciesAction> for Action {
    fn from(action: PoliciesAction) -> Self {
        Action::Policies(action)
    }
}

impl From<ClaimsAction> for Action {
    fn from(action: ClaimsAction) -> Self {
        Action::Claims(action)
    }
}

/// Root reducer: delegates to the owning slice, leaving the others untouched
pub fn reduce(mut state: RootState, action: Action) -> RootState {
    match action {
        Action::Auth(action) => state.auth = auth::reduce(state.auth, action),
        Action::Policies(action) => state.policies = policies::reduce(state.policies, action),
        Action::Claims(action) => state.claims = claims::reduce(state.claims, action),
    }
    state
}
