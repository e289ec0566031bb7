//! Premium analytics
//!
//! Pure aggregations over the policy list feeding the dashboard charts:
//! monthly premium trends, the per-type distribution, and the headline
//! total/average figures.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::policy::{Policy, PolicyType};

/// Premium aggregate for one calendar month of policy start dates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPremium {
    /// Month key in `YYYY-MM` form
    pub date: String,
    /// Sum of premiums for policies starting in this month
    pub total_premium: Decimal,
    /// Total divided by count, rounded half away from zero
    pub average_premium: Decimal,
    /// Number of policies starting in this month
    pub policy_count: usize,
}

/// Distribution entry for one policy type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDistribution {
    /// The policy type
    pub policy_type: PolicyType,
    /// Number of policies of this type
    pub count: usize,
    /// Sum of premiums of this type
    pub total_premium: Decimal,
    /// Share of all policies, 0 when the list is empty
    pub percentage: f64,
}

/// Headline totals across the whole policy list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumSummary {
    pub total_premium: Decimal,
    pub average_premium: Decimal,
}

fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Groups policies by the calendar month of their start date.
///
/// Output is sorted ascending by month key.
pub fn premiums_by_month(policies: &[Policy]) -> Vec<MonthlyPremium> {
    let mut groups: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
    for policy in policies {
        let month = policy.start_date.format("%Y-%m").to_string();
        let entry = groups.entry(month).or_insert((Decimal::ZERO, 0));
        entry.0 += policy.premium_amount;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (total, count))| MonthlyPremium {
            date,
            total_premium: total,
            average_premium: round_to_unit(total / Decimal::from(count as u64)),
            policy_count: count,
        })
        .collect()
}

/// Counts policies and sums premiums per type over the fixed enumeration.
///
/// Every type appears in the output even with zero policies; the percentage
/// is defined as 0 (never NaN) for an empty list.
pub fn distribution_by_type(policies: &[Policy]) -> Vec<TypeDistribution> {
    let total_count = policies.len();
    PolicyType::ALL
        .iter()
        .map(|&policy_type| {
            let matching = policies.iter().filter(|p| p.policy_type == policy_type);
            let mut count = 0;
            let mut total_premium = Decimal::ZERO;
            for policy in matching {
                count += 1;
                total_premium += policy.premium_amount;
            }
            let percentage = if total_count == 0 {
                0.0
            } else {
                count as f64 / total_count as f64 * 100.0
            };
            TypeDistribution {
                policy_type,
                count,
                total_premium,
                percentage,
            }
        })
        .collect()
}

/// Total and rounded average premium across all policies.
///
/// Both figures are zero for an empty list.
pub fn premium_summary(policies: &[Policy]) -> PremiumSummary {
    let total: Decimal = policies.iter().map(|p| p.premium_amount).sum();
    let average = if policies.is_empty() {
        Decimal::ZERO
    } else {
        round_to_unit(total / Decimal::from(policies.len() as u64))
    };
    PremiumSummary {
        total_premium: total,
        average_premium: average,
    }
}
