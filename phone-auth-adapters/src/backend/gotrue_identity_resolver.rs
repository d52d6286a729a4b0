use phone_auth_core::{BearerToken, IdentityResolver, IdentityResolverError, UserId};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use super::API_KEY_HEADER;

const USER_PATH: &str = "/auth/v1/user";

/// Resolves a caller's bearer token to a user id via the backend's
/// identity endpoint.
///
/// Authenticated with the public anon key plus the caller's own token; no
/// privileged credential is involved in finding out who is calling.
#[derive(Clone)]
pub struct GoTrueIdentityResolver {
    http_client: Client,
    base_url: String,
    anon_key: Secret<String>,
}

impl GoTrueIdentityResolver {
    pub fn new(base_url: String, anon_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            anon_key,
        }
    }
}

#[derive(serde::Deserialize)]
struct AuthUser {
    id: Option<String>,
}

#[async_trait::async_trait]
impl IdentityResolver for GoTrueIdentityResolver {
    #[tracing::instrument(name = "Resolving caller identity", skip_all)]
    async fn resolve(&self, token: &BearerToken) -> Result<UserId, IdentityResolverError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| IdentityResolverError::Backend(e.to_string()))?;
        let url = base
            .join(USER_PATH)
            .map_err(|e| IdentityResolverError::Backend(e.to_string()))?;

        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, self.anon_key.expose_secret())
            .bearer_auth(token.as_ref().expose_secret())
            .send()
            .await
            .map_err(|e| IdentityResolverError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            tracing::info!(status = %response.status(), "identity lookup refused");
            return Err(IdentityResolverError::InvalidSession);
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| IdentityResolverError::Backend(e.to_string()))?;

        let id = user.id.ok_or(IdentityResolverError::InvalidSession)?;
        UserId::try_from(id).map_err(|_| IdentityResolverError::InvalidSession)
    }
}
