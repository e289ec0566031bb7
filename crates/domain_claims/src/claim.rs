//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_kernel::{ClaimId, PolicyId, UserId};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Submitted by the user, awaiting triage
    Submitted,
    /// Under review by an adjuster
    UnderReview,
    /// Approved for payment
    Approved,
    /// Rejected
    Rejected,
}

impl ClaimStatus {
    /// Wire form of the status, e.g. `under_review`
    pub fn wire_name(self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::UnderReview => "under_review",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    /// History-stage label: the wire name upper-cased with underscores as
    /// spaces, e.g. `UNDER REVIEW`
    pub fn stage_label(self) -> String {
        self.wire_name().replace('_', " ").to_uppercase()
    }
}

/// One append-only entry in a claim's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimHistoryEntry {
    /// Stage label, e.g. `Submitted` or `UNDER REVIEW`
    pub stage: String,
    /// Client-stamped timestamp of the transition
    pub date: DateTime<Utc>,
    /// Free-form remarks
    pub remarks: String,
}

/// A claim filed against a policy
///
/// The history is monotonically non-decreasing in length and ordered by
/// occurrence; a claim always holds at least the submission entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claimant
    pub user_id: UserId,
    /// Policy the claim is filed against
    pub policy_id: PolicyId,
    /// Free-form claim type, e.g. "Medical"
    pub claim_type: String,
    /// Description of the loss
    pub description: String,
    /// Attached file references
    pub files: Vec<String>,
    /// Current status
    pub status: ClaimStatus,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// Append-only transition records
    pub history: Vec<ClaimHistoryEntry>,
}

impl Claim {
    /// Applies a status transition, appending the matching history entry.
    ///
    /// The timestamp is supplied by the caller so this stays a pure state
    /// transformation.
    pub fn apply_status(&mut self, status: ClaimStatus, remarks: String, at: DateTime<Utc>) {
        self.status = status;
        self.history.push(ClaimHistoryEntry {
            stage: status.stage_label(),
            date: at,
            remarks,
        });
    }
}

/// User-provided fields of a claim before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDraft {
    pub user_id: UserId,
    pub policy_id: PolicyId,
    pub claim_type: String,
    pub description: String,
    pub files: Vec<String>,
}

impl ClaimDraft {
    /// Builds the full submission payload: status `Submitted`, the given
    /// timestamp, and the initial history entry.
    pub fn into_submission(self, now: DateTime<Utc>) -> NewClaim {
        NewClaim {
            user_id: self.user_id,
            policy_id: self.policy_id,
            claim_type: self.claim_type,
            description: self.description,
            files: self.files,
            status: ClaimStatus::Submitted,
            submitted_at: now,
            history: vec![ClaimHistoryEntry {
                stage: "Submitted".to_string(),
                date: now,
                remarks: "Claim submitted by user.".to_string(),
            }],
        }
    }
}

/// A claim ready to be POSTed: everything but the server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    pub user_id: UserId,
    pub policy_id: PolicyId,
    pub claim_type: String,
    pub description: String,
    pub files: Vec<String>,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
    pub history: Vec<ClaimHistoryEntry>,
}

impl NewClaim {
    /// Attaches the server-assigned id, yielding the stored entity
    pub fn with_id(self, id: ClaimId) -> Claim {
        Claim {
            id,
            user_id: self.user_id,
            policy_id: self.policy_id,
            claim_type: self.claim_type,
            description: self.description,
            files: self.files,
            status: self.status,
            submitted_at: self.submitted_at,
            history: self.history,
        }
    }
}
