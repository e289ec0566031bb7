//! Claims slice

use chrono::{DateTime, Utc};

use domain_claims::{Claim, ClaimStatus};
use portal_kernel::{ClaimId, FetchStatus};

/// Claims slice state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimsState {
    /// The user's claim collection
    pub claims: Vec<Claim>,
    /// Detail-view focus, cleared on navigation away and on each new detail
    /// fetch
    pub current_claim: Option<Claim>,
    /// Lifecycle status of the latest claim operation
    pub status: FetchStatus,
    /// Reason of the latest rejection, if any
    pub error: Option<String>,
}

/// Legal mutations of the claims slice
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimsAction {
    /// Navigation away from the detail view
    ClearCurrentClaim,
    /// Status transition with its append-only history record. The timestamp
    /// is stamped by the store so the reducer stays pure.
    UpdateClaimStatus {
        claim_id: ClaimId,
        status: ClaimStatus,
        remarks: String,
        at: DateTime<Utc>,
    },
    SubmitClaimPending,
    SubmitClaimFulfilled(Claim),
    SubmitClaimRejected(String),
    FetchClaimsPending,
    FetchClaimsFulfilled(Vec<Claim>),
    FetchClaimsRejected(String),
    FetchClaimPending,
    FetchClaimFulfilled(Claim),
    FetchClaimRejected(String),
}

/// Pure reducer for the claims slice
pub fn reduce(mut state: ClaimsState, action: ClaimsAction) -> ClaimsState {
    match action {
        ClaimsAction::ClearCurrentClaim => {
            state.current_claim = None;
            state.error = None;
            state.status = FetchStatus::Idle;
        }
        ClaimsAction::UpdateClaimStatus {
            claim_id,
            status,
            remarks,
            at,
        } => {
            // Unknown ids are a no-op
            if let Some(claim) = state.claims.iter_mut().find(|c| c.id == claim_id) {
                claim.apply_status(status, remarks, at);
            }
        }
        ClaimsAction::SubmitClaimPending | ClaimsAction::FetchClaimsPending => {
            state.status = FetchStatus::Loading;
            state.error = None;
        }
        ClaimsAction::SubmitClaimFulfilled(claim) => {
            state.status = FetchStatus::Succeeded;
            state.claims.push(claim);
        }
        ClaimsAction::FetchClaimsFulfilled(claims) => {
            state.status = FetchStatus::Succeeded;
            state.claims = claims;
        }
        ClaimsAction::FetchClaimPending => {
            state.status = FetchStatus::Loading;
            state.error = None;
            state.current_claim = None;
        }
        ClaimsAction::FetchClaimFulfilled(claim) => {
            state.status = FetchStatus::Succeeded;
            state.current_claim = Some(claim);
        }
        ClaimsAction::SubmitClaimRejected(reason)
        | ClaimsAction::FetchClaimsRejected(reason)
        | ClaimsAction::FetchClaimRejected(reason) => {
            state.status = FetchStatus::Failed;
            state.error = Some(reason);
        }
    }
    state
}
