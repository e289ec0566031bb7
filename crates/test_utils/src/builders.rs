//! Test data builders
//!
//! Builder patterns for constructing portal entities with sensible
//! defaults, so tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_claims::{Claim, ClaimDraft, ClaimStatus};
use domain_policy::{Policy, PolicyStatus, PolicyType};
use portal_kernel::{ClaimId, PolicyId, UserId};

use crate::fixtures::{fixed_now, ymd};

/// Builder for test policies
pub struct PolicyBuilder {
    id: PolicyId,
    user_id: UserId,
    policy_type: PolicyType,
    status: PolicyStatus,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium_amount: Decimal,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a builder with default values: a Health policy owned by
    /// user 1, active for calendar year 2024, premium 1000
    pub fn new() -> Self {
        Self {
            id: PolicyId::new(1),
            user_id: UserId::new(1),
            policy_type: PolicyType::Health,
            status: PolicyStatus::Active,
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2024, 12, 31),
            premium_amount: dec!(1000),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = PolicyId::new(id);
        self
    }

    pub fn user(mut self, user_id: u64) -> Self {
        self.user_id = UserId::new(user_id);
        self
    }

    pub fn policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    pub fn status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    pub fn ending(mut self, date: NaiveDate) -> Self {
        self.end_date = date;
        self
    }

    pub fn premium(mut self, amount: Decimal) -> Self {
        self.premium_amount = amount;
        self
    }

    pub fn build(self) -> Policy {
        Policy {
            id: self.id,
            user_id: self.user_id,
            policy_type: self.policy_type,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            coverage_details: "Standard coverage".to_string(),
            premium_amount: self.premium_amount,
            document_url: format!("/documents/policy-{}.pdf", self.id),
            details: format!("{} policy", self.policy_type.name()),
        }
    }
}

/// Builder for test claims
pub struct ClaimBuilder {
    id: ClaimId,
    user_id: UserId,
    policy_id: PolicyId,
    claim_type: String,
    description: String,
    status: Option<(ClaimStatus, String)>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder with default values: a freshly submitted Medical
    /// claim by user 1 against policy 1
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1),
            user_id: UserId::new(1),
            policy_id: PolicyId::new(1),
            claim_type: "Medical".to_string(),
            description: "Test claim".to_string(),
            status: None,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    pub fn user(mut self, user_id: u64) -> Self {
        self.user_id = UserId::new(user_id);
        self
    }

    pub fn policy(mut self, policy_id: u64) -> Self {
        self.policy_id = PolicyId::new(policy_id);
        self
    }

    pub fn claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Transitions the built claim past submission into the given status
    pub fn transitioned(mut self, status: ClaimStatus, remarks: impl Into<String>) -> Self {
        self.status = Some((status, remarks.into()));
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = ClaimDraft {
            user_id: self.user_id,
            policy_id: self.policy_id,
            claim_type: self.claim_type,
            description: self.description,
            files: vec![],
        }
        .into_submission(fixed_now())
        .with_id(self.id);

        if let Some((status, remarks)) = self.status {
            claim.apply_status(status, remarks, fixed_now());
        }
        claim
    }
}
