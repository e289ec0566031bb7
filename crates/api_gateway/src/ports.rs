//! Portal API port
//!
//! `PortalApi` defines every remote operation the store performs, enabling
//! swappable adapters: the reqwest-backed `RestGateway` in production and an
//! in-memory mock for tests. Authorization and ownership rules live in the
//! store, not here; the port is a plain data access surface.

use async_trait::async_trait;

use domain_auth::{NewUser, User};
use domain_claims::{Claim, NewClaim};
use domain_policy::Policy;
use portal_kernel::{ClaimId, PolicyId, UserId};

use crate::error::GatewayError;

/// The remote-data port consumed by the store
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Looks up a user by credentials; `None` when no user matches
    async fn find_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, GatewayError>;

    /// Creates a user at signup
    async fn create_user(&self, new_user: NewUser) -> Result<User, GatewayError>;

    /// Lists all policies owned by a user
    async fn policies_for_user(&self, user_id: UserId) -> Result<Vec<Policy>, GatewayError>;

    /// Fetches a single policy; `GatewayError::NotFound` when missing
    async fn policy_by_id(&self, id: PolicyId) -> Result<Policy, GatewayError>;

    /// Lists all claims filed by a user
    async fn claims_for_user(&self, user_id: UserId) -> Result<Vec<Claim>, GatewayError>;

    /// Fetches a single claim; `GatewayError::NotFound` when missing
    async fn claim_by_id(&self, id: ClaimId) -> Result<Claim, GatewayError>;

    /// Stores a submitted claim, returning it with its assigned id
    async fn create_claim(&self, new_claim: NewClaim) -> Result<Claim, GatewayError>;
}

/// In-memory mock implementation of `PortalApi` for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// Mock adapter backed by in-memory collections
    ///
    /// Ids are assigned sequentially above the highest seeded id. A failure
    /// flag turns every operation into a transport error, exercising the
    /// store's rejection paths.
    #[derive(Debug, Default)]
    pub struct MockPortalApi {
        users: RwLock<Vec<(User, String)>>,
        policies: RwLock<Vec<Policy>>,
        claims: RwLock<Vec<Claim>>,
        failing: AtomicBool,
    }

    impl MockPortalApi {
        /// Creates an empty mock
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds a user with their password
        pub async fn seed_user(&self, user: User, password: impl Into<String>) {
            self.users.write().await.push((user, password.into()));
        }

        /// Seeds policies
        pub async fn seed_policies(&self, policies: Vec<Policy>) {
            self.policies.write().await.extend(policies);
        }

        /// Seeds claims
        pub async fn seed_claims(&self, claims: Vec<Claim>) {
            self.claims.write().await.extend(claims);
        }

        /// Makes every subsequent operation fail with a transport error
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::Relaxed);
        }

        fn check_available(&self) -> Result<(), GatewayError> {
            if self.failing.load(Ordering::Relaxed) {
                return Err(GatewayError::Transport {
                    message: "injected failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PortalApi for MockPortalApi {
        async fn find_user(
            &self,
            username: &str,
            password: &str,
        ) -> Result<Option<User>, GatewayError> {
            self.check_available()?;
            Ok(self
                .users
                .read()
                .await
                .iter()
                .find(|(user, stored)| user.username == username && stored == password)
                .map(|(user, _)| user.clone()))
        }

        async fn create_user(&self, new_user: NewUser) -> Result<User, GatewayError> {
            self.check_available()?;
            let mut users = self.users.write().await;
            let next_id = users
                .iter()
                .map(|(user, _)| user.id.value())
                .max()
                .unwrap_or(0)
                + 1;
            let user = User {
                id: UserId::new(next_id),
                username: new_user.username,
                name: new_user.name,
            };
            users.push((user.clone(), new_user.password));
            Ok(user)
        }

        async fn policies_for_user(&self, user_id: UserId) -> Result<Vec<Policy>, GatewayError> {
            self.check_available()?;
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .filter(|policy| policy.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn policy_by_id(&self, id: PolicyId) -> Result<Policy, GatewayError> {
            self.check_available()?;
            self.policies
                .read()
                .await
                .iter()
                .find(|policy| policy.id == id)
                .cloned()
                .ok_or_else(|| GatewayError::not_found("policy"))
        }

        async fn claims_for_user(&self, user_id: UserId) -> Result<Vec<Claim>, GatewayError> {
            self.check_available()?;
            Ok(self
                .claims
                .read()
                .await
                .iter()
                .filter(|claim| claim.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn claim_by_id(&self, id: ClaimId) -> Result<Claim, GatewayError> {
            self.check_available()?;
            self.claims
                .read()
                .await
                .iter()
                .find(|claim| claim.id == id)
                .cloned()
                .ok_or_else(|| GatewayError::not_found("claim"))
        }

        async fn create_claim(&self, new_claim: NewClaim) -> Result<Claim, GatewayError> {
            self.check_available()?;
            let mut claims = self.claims.write().await;
            let next_id = claims.iter().map(|claim| claim.id.value()).max().unwrap_or(0) + 1;
            let claim = new_claim.with_id(ClaimId::new(next_id));
            claims.push(claim.clone());
            Ok(claim)
        }
    }
}
