//! Policy entity

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use portal_kernel::{days_until, PolicyId, UserId};

/// Line of business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Health,
    Auto,
    Home,
}

impl PolicyType {
    /// The fixed enumeration used by the distribution chart
    pub const ALL: [PolicyType; 3] = [PolicyType::Health, PolicyType::Auto, PolicyType::Home];

    /// Display name, matching the wire form
    pub fn name(self) -> &'static str {
        match self {
            PolicyType::Health => "Health",
            PolicyType::Auto => "Auto",
            PolicyType::Home => "Home",
        }
    }
}

/// Policy lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Pending,
    Expired,
}

/// An insurance policy owned by a portal user
///
/// Read-only from the client's perspective: the portal fetches policies but
/// exposes no mutation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Owning user
    pub user_id: UserId,
    /// Line of business
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    /// Lifecycle status
    pub status: PolicyStatus,
    /// Coverage start date
    pub start_date: NaiveDate,
    /// Coverage end date
    pub end_date: NaiveDate,
    /// Coverage summary text
    pub coverage_details: String,
    /// Periodic premium
    pub premium_amount: Decimal,
    /// Link to the policy document
    pub document_url: String,
    /// Free-form description
    pub details: String,
}

impl Policy {
    /// Whole days remaining until this policy's end date, rounded up
    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        days_until(self.end_date, now)
    }
}
