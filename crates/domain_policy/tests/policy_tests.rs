//! Tests for the policy domain: renewal windows and premium analytics

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use portal_kernel::{PolicyId, UserId};

use domain_policy::{
    distribution_by_type, policies_near_expiry, premium_summary, premiums_by_month, Policy,
    PolicyStatus, PolicyType, DEFAULT_RENEWAL_WINDOW_DAYS,
};

fn policy(id: u64, start: (i32, u32, u32), end: (i32, u32, u32), premium: Decimal) -> Policy {
    Policy {
        id: PolicyId::new(id),
        user_id: UserId::new(1),
        policy_type: PolicyType::Health,
        status: PolicyStatus::Active,
        start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        coverage_details: "coverage".to_string(),
        premium_amount: premium,
        document_url: format!("/docs/{id}.pdf"),
        details: "details".to_string(),
    }
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

mod expiry_tests {
    use super::*;

    #[test]
    fn test_policy_inside_window_is_included() {
        let now = midnight(2024, 6, 15);
        let policies = vec![policy(1, (2024, 1, 1), (2024, 7, 1), dec!(500))];

        let near = policies_near_expiry(&policies, now, DEFAULT_RENEWAL_WINDOW_DAYS);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].days_left(now), 16);
    }

    #[test]
    fn test_policy_beyond_window_is_excluded() {
        let now = midnight(2024, 6, 15);
        let policies = vec![policy(1, (2024, 1, 1), (2024, 7, 20), dec!(500))];

        // 35 days out
        assert!(policies_near_expiry(&policies, now, 30).is_empty());
    }

    #[test]
    fn test_policy_expiring_today_is_excluded() {
        let now = midnight(2024, 6, 15);
        let policies = vec![policy(1, (2024, 1, 1), (2024, 6, 15), dec!(500))];

        assert!(policies_near_expiry(&policies, now, 30).is_empty());
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let now = midnight(2024, 6, 15);
        let policies = vec![policy(1, (2024, 1, 1), (2024, 7, 15), dec!(500))];

        assert_eq!(policies[0].days_left(now), 30);
        assert_eq!(policies_near_expiry(&policies, now, 30).len(), 1);
    }

    #[test]
    fn test_already_expired_policy_is_excluded() {
        let now = midnight(2024, 6, 15);
        let policies = vec![policy(1, (2023, 1, 1), (2024, 6, 1), dec!(500))];

        assert!(policies_near_expiry(&policies, now, 30).is_empty());
    }

    proptest! {
        // Membership holds exactly when 0 < days_left <= window, for any
        // whole-day offset around the window boundary.
        #[test]
        fn prop_membership_matches_window(offset in -60i64..120, window in 1i64..60) {
            use chrono::Datelike;

            let now = midnight(2024, 6, 15);
            let end = now.date_naive() + chrono::Duration::days(offset);
            let policies =
                vec![policy(1, (2024, 1, 1), (end.year(), end.month(), end.day()), dec!(100))];

            let included = !policies_near_expiry(&policies, now, window).is_empty();
            prop_assert_eq!(included, offset > 0 && offset <= window);
        }
    }
}

mod analytics_tests {
    use super::*;

    #[test]
    fn test_monthly_aggregate_matches_reference() {
        let policies = vec![
            policy(1, (2024, 1, 5), (2025, 1, 5), dec!(1000)),
            policy(2, (2024, 1, 20), (2025, 1, 20), dec!(800)),
            policy(3, (2024, 2, 1), (2025, 2, 1), dec!(1200)),
        ];

        let monthly = premiums_by_month(&policies);
        assert_eq!(monthly.len(), 2);

        assert_eq!(monthly[0].date, "2024-01");
        assert_eq!(monthly[0].total_premium, dec!(1800));
        assert_eq!(monthly[0].average_premium, dec!(900));
        assert_eq!(monthly[0].policy_count, 2);

        assert_eq!(monthly[1].date, "2024-02");
        assert_eq!(monthly[1].total_premium, dec!(1200));
        assert_eq!(monthly[1].average_premium, dec!(1200));
        assert_eq!(monthly[1].policy_count, 1);
    }

    #[test]
    fn test_monthly_aggregate_sorted_ascending() {
        let policies = vec![
            policy(1, (2024, 3, 1), (2025, 3, 1), dec!(100)),
            policy(2, (2023, 12, 1), (2024, 12, 1), dec!(200)),
            policy(3, (2024, 1, 1), (2025, 1, 1), dec!(300)),
        ];

        let months: Vec<_> = premiums_by_month(&policies)
            .into_iter()
            .map(|m| m.date)
            .collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        let policies = vec![
            policy(1, (2024, 1, 1), (2025, 1, 1), dec!(100)),
            policy(2, (2024, 1, 2), (2025, 1, 2), dec!(101)),
        ];

        // 100.5 rounds to 101, not banker's 100
        assert_eq!(premiums_by_month(&policies)[0].average_premium, dec!(101));
    }

    #[test]
    fn test_distribution_covers_fixed_enumeration() {
        let mut p1 = policy(1, (2024, 1, 1), (2025, 1, 1), dec!(1000));
        p1.policy_type = PolicyType::Auto;
        let mut p2 = policy(2, (2024, 1, 1), (2025, 1, 1), dec!(600));
        p2.policy_type = PolicyType::Auto;
        let p3 = policy(3, (2024, 1, 1), (2025, 1, 1), dec!(900));

        let distribution = distribution_by_type(&[p1, p2, p3]);
        assert_eq!(distribution.len(), 3);

        let health = &distribution[0];
        assert_eq!(health.policy_type, PolicyType::Health);
        assert_eq!(health.count, 1);
        assert_eq!(health.total_premium, dec!(900));
        assert!((health.percentage - 100.0 / 3.0).abs() < 1e-9);

        let auto = &distribution[1];
        assert_eq!(auto.count, 2);
        assert_eq!(auto.total_premium, dec!(1600));

        let home = &distribution[2];
        assert_eq!(home.count, 0);
        assert_eq!(home.total_premium, dec!(0));
        assert_eq!(home.percentage, 0.0);
    }

    #[test]
    fn test_distribution_over_empty_list_has_no_nan() {
        let distribution = distribution_by_type(&[]);
        assert_eq!(distribution.len(), 3);
        for entry in distribution {
            assert_eq!(entry.count, 0);
            assert_eq!(entry.percentage, 0.0);
            assert!(!entry.percentage.is_nan());
        }
    }

    #[test]
    fn test_premium_summary() {
        let policies = vec![
            policy(1, (2024, 1, 1), (2025, 1, 1), dec!(1000)),
            policy(2, (2024, 2, 1), (2025, 2, 1), dec!(801)),
        ];

        let summary = premium_summary(&policies);
        assert_eq!(summary.total_premium, dec!(1801));
        assert_eq!(summary.average_premium, dec!(901));
    }

    #[test]
    fn test_premium_summary_empty_is_zero() {
        let summary = premium_summary(&[]);
        assert_eq!(summary.total_premium, dec!(0));
        assert_eq!(summary.average_premium, dec!(0));
    }
}
