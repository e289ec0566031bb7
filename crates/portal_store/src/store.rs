//! The store container and async-fetch lifecycle
//!
//! Every remote operation follows the same three-phase protocol: dispatch
//! the pending action, run the call, then dispatch exactly one of the two
//! outcome actions. Failures never escape as errors; they are committed to
//! slice state as reason strings and the store stays fully operable.
//!
//! Overlapping fetches against one slice are last-resolved-wins. That is a
//! documented looseness of the single-user portal, not a guarantee.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use api_gateway::PortalApi;
use domain_auth::{LoginCredentials, NewUser, User};
use domain_claims::{ClaimDraft, ClaimStatus};
use portal_kernel::{ClaimId, PolicyId};

use crate::slices::auth::AuthAction;
use crate::slices::claims::ClaimsAction;
use crate::slices::policies::PoliciesAction;
use crate::state::{reduce, Action, RootState};

/// The exclusive write path for all client state
///
/// Explicit and injectable: no global singleton. Tests construct isolated
/// stores over a mock gateway, optionally with preloaded state.
pub struct Store {
    state: RwLock<RootState>,
    api: Arc<dyn PortalApi>,
}

impl Store {
    /// Creates a store with default (empty, unauthenticated) state
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self::with_state(api, RootState::default())
    }

    /// Creates a store over a preloaded state shape
    pub fn with_state(api: Arc<dyn PortalApi>, state: RootState) -> Self {
        Self {
            state: RwLock::new(state),
            api,
        }
    }

    /// Returns an immutable snapshot of the current state
    pub async fn state(&self) -> RootState {
        self.state.read().await.clone()
    }

    /// Applies a synchronous action through the root reducer
    pub async fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        debug!(?action, "dispatch");
        let mut state = self.state.write().await;
        *state = reduce(std::mem::take(&mut *state), action);
    }

    async fn session_user(&self) -> Option<User> {
        self.state.read().await.auth.session.user.clone()
    }

    // ========================================================================
    // Auth operations
    // ========================================================================

    /// Logs in with username/password credentials
    pub async fn login(&self, credentials: LoginCredentials) {
        self.dispatch(AuthAction::LoginPending).await;
        match self
            .api
            .find_user(&credentials.username, &credentials.password)
            .await
        {
            Ok(Some(user)) => {
                let token = Uuid::new_v4().to_string();
                self.dispatch(AuthAction::LoginFulfilled { user, token })
                    .await;
            }
            Ok(None) => {
                self.dispatch(AuthAction::LoginRejected(
                    "Invalid username or password".to_string(),
                ))
                .await;
            }
            Err(err) => {
                warn!(%err, "login failed");
                self.dispatch(AuthAction::LoginRejected(
                    "An error occurred during login".to_string(),
                ))
                .await;
            }
        }
    }

    /// Registers a new user and authenticates the session
    pub async fn signup(&self, new_user: NewUser) {
        self.dispatch(AuthAction::SignupPending).await;
        match self.api.create_user(new_user).await {
            Ok(user) => self.dispatch(AuthAction::SignupFulfilled(user)).await,
            Err(err) => {
                warn!(%err, "signup failed");
                self.dispatch(AuthAction::SignupRejected(
                    "An error occurred during signup".to_string(),
                ))
                .await;
            }
        }
    }

    /// Destroys the session
    pub async fn logout(&self) {
        self.dispatch(AuthAction::LoggedOut).await;
    }

    // ========================================================================
    // Policy operations
    // ========================================================================

    /// Fetches the authenticated user's policy list
    pub async fn fetch_policies(&self) {
        self.dispatch(PoliciesAction::FetchPoliciesPending).await;
        let Some(user) = self.session_user().await else {
            self.dispatch(PoliciesAction::FetchPoliciesRejected(
                "User not authenticated".to_string(),
            ))
            .await;
            return;
        };
        match self.api.policies_for_user(user.id).await {
            Ok(policies) => {
                self.dispatch(PoliciesAction::FetchPoliciesFulfilled(policies))
                    .await;
            }
            Err(err) => {
                warn!(%err, "policy list fetch failed");
                self.dispatch(PoliciesAction::FetchPoliciesRejected(
                    "Failed to fetch policies".to_string(),
                ))
                .await;
            }
        }
    }

    /// Fetches one policy for the detail view
    ///
    /// Rejects with "Access denied" when the fetched policy belongs to a
    /// different user, even though the network call itself succeeded.
    pub async fn fetch_policy(&self, id: PolicyId) {
        self.dispatch(PoliciesAction::FetchPolicyPending).await;
        let Some(user) = self.session_user().await else {
            self.dispatch(PoliciesAction::FetchPolicyRejected(
                "User not authenticated".to_string(),
            ))
            .await;
            return;
        };
        let outcome = match self.api.policy_by_id(id).await {
            Ok(policy) if policy.user_id != user.id => {
                PoliciesAction::FetchPolicyRejected("Access denied".to_string())
            }
            Ok(policy) => PoliciesAction::FetchPolicyFulfilled(policy),
            Err(err) if err.is_not_found() => {
                PoliciesAction::FetchPolicyRejected("Policy not found".to_string())
            }
            Err(err) => {
                warn!(%err, "policy detail fetch failed");
                PoliciesAction::FetchPolicyRejected("Failed to fetch policy details".to_string())
            }
        };
        self.dispatch(outcome).await;
    }

    /// Clears the policy detail focus on navigation away
    pub async fn clear_current_policy(&self) {
        self.dispatch(PoliciesAction::ClearCurrentPolicy).await;
    }

    // ========================================================================
    // Claim operations
    // ========================================================================

    /// Fetches the authenticated user's claim list
    pub async fn fetch_claims(&self) {
        self.dispatch(ClaimsAction::FetchClaimsPending).await;
        let Some(user) = self.session_user().await else {
            self.dispatch(ClaimsAction::FetchClaimsRejected(
                "User not authenticated".to_string(),
            ))
            .await;
            return;
        };
        match self.api.claims_for_user(user.id).await {
            Ok(claims) => {
                self.dispatch(ClaimsAction::FetchClaimsFulfilled(claims))
                    .await;
            }
            Err(err) => {
                warn!(%err, "claim list fetch failed");
                self.dispatch(ClaimsAction::FetchClaimsRejected(
                    "Failed to fetch claims".to_string(),
                ))
                .await;
            }
        }
    }

    /// Fetches one claim for the detail view, with the same ownership check
    /// as the policy detail fetch
    pub async fn fetch_claim(&self, id: ClaimId) {
        self.dispatch(ClaimsAction::FetchClaimPending).await;
        let Some(user) = self.session_user().await else {
            self.dispatch(ClaimsAction::FetchClaimRejected(
                "User not authenticated".to_string(),
            ))
            .await;
            return;
        };
        let outcome = match self.api.claim_by_id(id).await {
            Ok(claim) if claim.user_id != user.id => {
                ClaimsAction::FetchClaimRejected("Access denied".to_string())
            }
            Ok(claim) => ClaimsAction::FetchClaimFulfilled(claim),
            Err(err) if err.is_not_found() => {
                ClaimsAction::FetchClaimRejected("Claim not found".to_string())
            }
            Err(err) => {
                warn!(%err, "claim detail fetch failed");
                ClaimsAction::FetchClaimRejected("Failed to fetch claim details".to_string())
            }
        };
        self.dispatch(outcome).await;
    }

    /// Submits a claim: stamps the submission fields and initial history
    /// entry client-side, POSTs it, and appends the stored entity
    pub async fn submit_claim(&self, draft: ClaimDraft) {
        self.dispatch(ClaimsAction::SubmitClaimPending).await;
        if self.session_user().await.is_none() {
            self.dispatch(ClaimsAction::SubmitClaimRejected(
                "User not authenticated".to_string(),
            ))
            .await;
            return;
        }
        let submission = draft.into_submission(Utc::now());
        match self.api.create_claim(submission).await {
            Ok(claim) => {
                self.dispatch(ClaimsAction::SubmitClaimFulfilled(claim))
                    .await;
            }
            Err(err) => {
                warn!(%err, "claim submission failed");
                self.dispatch(ClaimsAction::SubmitClaimRejected(
                    "Failed to submit claim".to_string(),
                ))
                .await;
            }
        }
    }

    /// Applies a status transition to a claim in the list, appending its
    /// history record with a store-stamped timestamp
    pub async fn update_claim_status(&self, claim_id: ClaimId, status: ClaimStatus, remarks: String) {
        self.dispatch(ClaimsAction::UpdateClaimStatus {
            claim_id,
            status,
            remarks,
            at: Utc::now(),
        })
        .await;
    }

    /// Clears the claim detail focus on navigation away
    pub async fn clear_current_claim(&self) {
        self.dispatch(ClaimsAction::ClearCurrentClaim).await;
    }
}
