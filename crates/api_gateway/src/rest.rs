//! REST adapter over reqwest
//!
//! Production implementation of `PortalApi` against a json-server style
//! backend: list endpoints take query-string filters, detail endpoints are
//! path-addressed, and creates POST the full entity minus its id.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use domain_auth::{NewUser, User};
use domain_claims::{Claim, NewClaim};
use domain_policy::Policy;
use portal_kernel::{ClaimId, PolicyId, UserId};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::ports::PortalApi;

/// HTTP gateway to the portal REST API
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: reqwest::Client,
    base_url: String,
}

impl RestGateway {
    /// Creates a gateway from configuration
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "request rejected by backend");
            return Err(GatewayError::Http {
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Maps a 404 onto the typed not-found variant for detail endpoints
    fn map_missing(err: GatewayError, entity: &'static str) -> GatewayError {
        match err {
            GatewayError::Http { status: 404 } => GatewayError::not_found(entity),
            other => other,
        }
    }
}

#[async_trait]
impl PortalApi for RestGateway {
    #[instrument(level = "debug", skip(self, password))]
    async fn find_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, GatewayError> {
        let matches: Vec<User> = self
            .get_json(
                "users",
                &[
                    ("username", username.to_string()),
                    ("password", password.to_string()),
                ],
            )
            .await?;
        debug!(matched = matches.len(), "credential lookup complete");
        Ok(matches.into_iter().next())
    }

    #[instrument(level = "debug", skip(self, new_user))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, GatewayError> {
        self.post_json("users", &new_user).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn policies_for_user(&self, user_id: UserId) -> Result<Vec<Policy>, GatewayError> {
        self.get_json("policies", &[("userId", user_id.to_string())])
            .await
    }

    #[instrument(level = "debug", skip(self))]
    async fn policy_by_id(&self, id: PolicyId) -> Result<Policy, GatewayError> {
        self.get_json(&format!("policies/{id}"), &[])
            .await
            .map_err(|err| Self::map_missing(err, "policy"))
    }

    #[instrument(level = "debug", skip(self))]
    async fn claims_for_user(&self, user_id: UserId) -> Result<Vec<Claim>, GatewayError> {
        self.get_json("claims", &[("userId", user_id.to_string())])
            .await
    }

    #[instrument(level = "debug", skip(self))]
    async fn claim_by_id(&self, id: ClaimId) -> Result<Claim, GatewayError> {
        self.get_json(&format!("claims/{id}"), &[])
            .await
            .map_err(|err| Self::map_missing(err, "claim"))
    }

    #[instrument(level = "debug", skip(self, new_claim))]
    async fn create_claim(&self, new_claim: NewClaim) -> Result<Claim, GatewayError> {
        self.post_json("claims", &new_claim).await
    }
}
