//! End-to-end lifecycle tests: store operations over the mock gateway

use std::sync::Arc;

use api_gateway::MockPortalApi;
use domain_auth::{LoginCredentials, NewUser, Session};
use domain_claims::{ClaimDraft, ClaimStatus};
use portal_kernel::{ClaimId, FetchStatus, PolicyId, UserId};
use portal_store::{AuthState, RootState, Store};

use test_utils::{other_user, portal_user, PolicyBuilder, ClaimBuilder};

fn authenticated_state() -> RootState {
    RootState {
        auth: AuthState {
            session: Session::authenticated(portal_user(), "tok".to_string()),
            status: FetchStatus::Succeeded,
            error: None,
        },
        ..Default::default()
    }
}

fn authenticated_store(api: Arc<MockPortalApi>) -> Store {
    Store::with_state(api, authenticated_state())
}

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_user(portal_user(), "secret").await;
        let store = Store::new(api);

        store
            .login(LoginCredentials {
                username: "jdoe".to_string(),
                password: "secret".to_string(),
            })
            .await;

        let state = store.state().await;
        assert_eq!(state.auth.status, FetchStatus::Succeeded);
        assert!(state.auth.session.is_authenticated);
        assert_eq!(state.auth.session.user, Some(portal_user()));
        assert!(state.auth.session.token.is_some());
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_user(portal_user(), "secret").await;
        let store = Store::new(api);

        store
            .login(LoginCredentials {
                username: "jdoe".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        let state = store.state().await;
        assert_eq!(state.auth.status, FetchStatus::Failed);
        assert_eq!(
            state.auth.error.as_deref(),
            Some("Invalid username or password")
        );
        assert!(!state.auth.session.is_authenticated);
    }

    #[tokio::test]
    async fn test_login_transport_failure() {
        let api = Arc::new(MockPortalApi::new());
        api.set_failing(true);
        let store = Store::new(api);

        store
            .login(LoginCredentials {
                username: "jdoe".to_string(),
                password: "secret".to_string(),
            })
            .await;

        let state = store.state().await;
        assert_eq!(state.auth.status, FetchStatus::Failed);
        assert_eq!(
            state.auth.error.as_deref(),
            Some("An error occurred during login")
        );
    }

    #[tokio::test]
    async fn test_signup_authenticates_without_token() {
        let api = Arc::new(MockPortalApi::new());
        let store = Store::new(api);

        store
            .signup(NewUser {
                username: "new".to_string(),
                password: "pw".to_string(),
                name: "New User".to_string(),
            })
            .await;

        let state = store.state().await;
        assert_eq!(state.auth.status, FetchStatus::Succeeded);
        assert!(state.auth.session.is_authenticated);
        assert!(state.auth.session.token.is_none());
        assert_eq!(
            state.auth.session.user.as_ref().map(|u| u.username.as_str()),
            Some("new")
        );
    }

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let api = Arc::new(MockPortalApi::new());
        let store = authenticated_store(api);

        store.logout().await;

        let state = store.state().await;
        assert_eq!(state.auth, AuthState::default());
    }
}

mod policy_tests {
    use super::*;

    #[tokio::test]
    async fn test_unauthenticated_fetch_rejects_before_any_network_call() {
        let api = Arc::new(MockPortalApi::new());
        // Any network call would blow up; the gate must reject first
        api.set_failing(true);
        let store = Store::new(api);

        store.fetch_policies().await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Failed);
        assert_eq!(
            state.policies.error.as_deref(),
            Some("User not authenticated")
        );
    }

    #[tokio::test]
    async fn test_fetch_policies_replaces_list() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_policies(vec![
            PolicyBuilder::new().id(1).user(1).build(),
            PolicyBuilder::new().id(2).user(1).build(),
            PolicyBuilder::new().id(3).user(9).build(),
        ])
        .await;
        let mut preloaded = authenticated_state();
        preloaded.policies.policies = vec![PolicyBuilder::new().id(99).build()];
        let store = Store::with_state(api, preloaded);

        store.fetch_policies().await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Succeeded);
        let ids: Vec<_> = state.policies.policies.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PolicyId::new(1), PolicyId::new(2)]);
    }

    #[tokio::test]
    async fn test_fetch_policy_detail() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_policies(vec![PolicyBuilder::new().id(2).user(1).build()])
            .await;
        let store = authenticated_store(api);

        store.fetch_policy(PolicyId::new(2)).await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Succeeded);
        assert_eq!(
            state.policies.current_policy.as_ref().map(|p| p.id),
            Some(PolicyId::new(2))
        );
    }

    #[tokio::test]
    async fn test_fetch_policy_of_another_user_is_access_denied() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_policies(vec![PolicyBuilder::new()
            .id(5)
            .user(other_user().id.value())
            .build()])
        .await;
        let store = authenticated_store(api);

        store.fetch_policy(PolicyId::new(5)).await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Failed);
        assert!(state.policies.current_policy.is_none());
        assert_eq!(state.policies.error.as_deref(), Some("Access denied"));
    }

    #[tokio::test]
    async fn test_fetch_missing_policy_is_not_found() {
        let api = Arc::new(MockPortalApi::new());
        let store = authenticated_store(api);

        store.fetch_policy(PolicyId::new(42)).await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Failed);
        assert_eq!(state.policies.error.as_deref(), Some("Policy not found"));
    }

    #[tokio::test]
    async fn test_fetch_policies_transport_failure() {
        let api = Arc::new(MockPortalApi::new());
        api.set_failing(true);
        let store = authenticated_store(api);

        store.fetch_policies().await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Failed);
        assert_eq!(
            state.policies.error.as_deref(),
            Some("Failed to fetch policies")
        );
    }

    #[tokio::test]
    async fn test_clear_current_policy_after_detail_view() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_policies(vec![PolicyBuilder::new().id(2).user(1).build()])
            .await;
        let store = authenticated_store(api);

        store.fetch_policy(PolicyId::new(2)).await;
        store.clear_current_policy().await;

        let state = store.state().await;
        assert!(state.policies.current_policy.is_none());
        assert_eq!(state.policies.status, FetchStatus::Idle);
        assert!(state.policies.error.is_none());
    }
}

mod claim_tests {
    use super::*;

    fn draft() -> ClaimDraft {
        ClaimDraft {
            user_id: UserId::new(1),
            policy_id: PolicyId::new(1),
            claim_type: "Medical".to_string(),
            description: "Broken arm treatment".to_string(),
            files: vec!["xray.pdf".to_string()],
        }
    }

    #[tokio::test]
    async fn test_submit_then_list_round_trip() {
        let api = Arc::new(MockPortalApi::new());
        let store = authenticated_store(api);

        store.submit_claim(draft()).await;

        let state = store.state().await;
        assert_eq!(state.claims.status, FetchStatus::Succeeded);
        assert_eq!(state.claims.claims.len(), 1);

        store.fetch_claims().await;

        let state = store.state().await;
        let listed = &state.claims.claims;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, ClaimStatus::Submitted);
        assert_eq!(listed[0].history.len(), 1);
        assert_eq!(listed[0].history[0].stage, "Submitted");
    }

    #[tokio::test]
    async fn test_unauthenticated_submit_is_rejected_locally() {
        let api = Arc::new(MockPortalApi::new());
        api.set_failing(true);
        let store = Store::new(api);

        store.submit_claim(draft()).await;

        let state = store.state().await;
        assert_eq!(state.claims.status, FetchStatus::Failed);
        assert_eq!(state.claims.error.as_deref(), Some("User not authenticated"));
        assert!(state.claims.claims.is_empty());
    }

    #[tokio::test]
    async fn test_submit_transport_failure() {
        let api = Arc::new(MockPortalApi::new());
        api.set_failing(true);
        let store = authenticated_store(api);

        store.submit_claim(draft()).await;

        let state = store.state().await;
        assert_eq!(state.claims.status, FetchStatus::Failed);
        assert_eq!(state.claims.error.as_deref(), Some("Failed to submit claim"));
    }

    #[tokio::test]
    async fn test_fetch_claim_of_another_user_is_access_denied() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_claims(vec![ClaimBuilder::new()
            .id(3)
            .user(other_user().id.value())
            .build()])
        .await;
        let store = authenticated_store(api);

        store.fetch_claim(ClaimId::new(3)).await;

        let state = store.state().await;
        assert_eq!(state.claims.status, FetchStatus::Failed);
        assert!(state.claims.current_claim.is_none());
        assert_eq!(state.claims.error.as_deref(), Some("Access denied"));
    }

    #[tokio::test]
    async fn test_fetch_missing_claim_is_not_found() {
        let api = Arc::new(MockPortalApi::new());
        let store = authenticated_store(api);

        store.fetch_claim(ClaimId::new(42)).await;

        let state = store.state().await;
        assert_eq!(state.claims.status, FetchStatus::Failed);
        assert_eq!(state.claims.error.as_deref(), Some("Claim not found"));
    }

    #[tokio::test]
    async fn test_update_claim_status_appends_history() {
        let api = Arc::new(MockPortalApi::new());
        let mut preloaded = authenticated_state();
        preloaded.claims.claims = vec![ClaimBuilder::new().id(4).build()];
        let store = Store::with_state(api, preloaded);

        store
            .update_claim_status(
                ClaimId::new(4),
                ClaimStatus::UnderReview,
                "Adjuster assigned".to_string(),
            )
            .await;

        let state = store.state().await;
        let claim = &state.claims.claims[0];
        assert_eq!(claim.status, ClaimStatus::UnderReview);
        assert_eq!(claim.history.len(), 2);
        assert_eq!(claim.history[1].stage, "UNDER REVIEW");
        assert_eq!(claim.history[1].remarks, "Adjuster assigned");
    }

    #[tokio::test]
    async fn test_failed_slice_remains_operable() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_claims(vec![ClaimBuilder::new().id(1).user(1).build()])
            .await;
        api.set_failing(true);
        let store = authenticated_store(Arc::clone(&api));

        store.fetch_claims().await;
        assert_eq!(store.state().await.claims.status, FetchStatus::Failed);

        // Re-dispatch after the backend recovers
        api.set_failing(false);
        store.fetch_claims().await;

        let state = store.state().await;
        assert_eq!(state.claims.status, FetchStatus::Succeeded);
        assert_eq!(state.claims.claims.len(), 1);
    }

    #[tokio::test]
    async fn test_slice_statuses_are_independent() {
        let api = Arc::new(MockPortalApi::new());
        api.seed_policies(vec![PolicyBuilder::new().id(1).user(1).build()])
            .await;
        let store = authenticated_store(api);

        store.fetch_policies().await;
        store.fetch_claim(ClaimId::new(42)).await;

        let state = store.state().await;
        assert_eq!(state.policies.status, FetchStatus::Succeeded);
        assert_eq!(state.claims.status, FetchStatus::Failed);
    }
}
