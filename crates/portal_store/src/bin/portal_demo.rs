//! Insurance Portal - Demo Client Binary
//!
//! Exercises the store against a running portal REST backend: logs in,
//! fetches policies and claims, and prints the renewal and dashboard views.
//!
//! # Usage
//!
//! ```bash
//! # Against the default backend (http://localhost:3001)
//! cargo run --bin portal-demo -- jdoe secret
//!
//! # Against another backend
//! PORTAL_BASE_URL=http://localhost:4000 cargo run --bin portal-demo -- jdoe secret
//! ```
//!
//! # Environment Variables
//!
//! * `PORTAL_BASE_URL` - Backend base URL (default: http://localhost:3001)
//! * `PORTAL_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! * `RUST_LOG` - Log filter (default: info)

use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use api_gateway::{GatewayConfig, RestGateway};
use domain_auth::LoginCredentials;
use domain_policy::DEFAULT_RENEWAL_WINDOW_DAYS;
use portal_store::{selectors, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let username = args.next().ok_or("usage: portal-demo <username> <password>")?;
    let password = args.next().ok_or("usage: portal-demo <username> <password>")?;

    let config = GatewayConfig::from_env().unwrap_or_default();
    tracing::info!(base_url = %config.base_url, "Connecting to portal backend");

    let gateway = RestGateway::new(config)?;
    let store = Store::new(Arc::new(gateway));

    store.login(LoginCredentials { username, password }).await;
    let state = store.state().await;
    if !state.auth.session.is_authenticated {
        return Err(state
            .auth
            .error
            .unwrap_or_else(|| "Login failed".to_string())
            .into());
    }

    store.fetch_policies().await;
    store.fetch_claims().await;
    let state = store.state().await;

    if let Some(reason) = &state.policies.error {
        tracing::warn!(%reason, "Policy fetch failed");
    }
    if let Some(reason) = &state.claims.error {
        tracing::warn!(%reason, "Claim fetch failed");
    }

    let now = Utc::now();
    println!("Policies: {}", state.policies.policies.len());
    for policy in selectors::near_expiry_policies(&state, now, DEFAULT_RENEWAL_WINDOW_DAYS) {
        println!(
            "  renewal due: {} policy #{} expires in {} days",
            policy.policy_type.name(),
            policy.id,
            policy.days_left(now)
        );
    }

    let summary = selectors::premium_totals(&state);
    println!(
        "Premiums: total {} / average {}",
        summary.total_premium, summary.average_premium
    );
    for entry in selectors::policy_type_distribution(&state) {
        println!(
            "  {}: {} policies ({:.1}%)",
            entry.policy_type.name(),
            entry.count,
            entry.percentage
        );
    }

    println!("Claims: {}", state.claims.claims.len());
    for month in selectors::monthly_premiums(&state) {
        println!(
            "  {}: total {} over {} policies",
            month.date, month.total_premium, month.policy_count
        );
    }

    Ok(())
}
