//! Root-state selectors
//!
//! Thin wrappers delegating to the pure domain projections. All selectors
//! are read-only, deterministic, and re-entrant; the view layer treats the
//! snapshots they read from as immutable.

use chrono::{DateTime, Utc};

use domain_claims::{claim_type_options, filter_claims, Claim};
use domain_policy::{
    distribution_by_type, policies_near_expiry, premium_summary, premiums_by_month,
    MonthlyPremium, Policy, PremiumSummary, TypeDistribution,
};

use crate::state::RootState;

/// Whether an authenticated session is present
pub fn is_authenticated(state: &RootState) -> bool {
    state.auth.session.is_authenticated
}

/// Policies expiring within the forward-looking day window
pub fn near_expiry_policies(
    state: &RootState,
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<&Policy> {
    policies_near_expiry(&state.policies.policies, now, window_days)
}

/// Claims matching a search term and optional type filter
pub fn filtered_claims<'a>(
    state: &'a RootState,
    search_term: &str,
    type_filter: Option<&str>,
) -> Vec<&'a Claim> {
    filter_claims(&state.claims.claims, search_term, type_filter)
}

/// Type-filter dropdown options derived from the claim list
pub fn claim_filter_options(state: &RootState) -> Vec<String> {
    claim_type_options(&state.claims.claims)
}

/// Monthly premium aggregates for the trends chart
pub fn monthly_premiums(state: &RootState) -> Vec<MonthlyPremium> {
    premiums_by_month(&state.policies.policies)
}

/// Per-type policy distribution for the dashboard chart
pub fn policy_type_distribution(state: &RootState) -> Vec<TypeDistribution> {
    distribution_by_type(&state.policies.policies)
}

/// Headline total/average premium figures
pub fn premium_totals(state: &RootState) -> PremiumSummary {
    premium_summary(&state.policies.policies)
}
