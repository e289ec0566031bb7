//! Claims Domain
//!
//! Claim entities for the portal client. A claim is created by submission
//! (which stamps the first history entry), and its status and history are
//! mutated only through append-only transition records. The crate also
//! carries the pure search/filter projection used by the claim-history view.

pub mod claim;
pub mod filter;

pub use claim::{Claim, ClaimDraft, ClaimHistoryEntry, ClaimStatus, NewClaim};
pub use filter::{claim_type_options, filter_claims};
