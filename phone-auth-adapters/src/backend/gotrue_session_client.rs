use phone_auth_core::{InternalEmail, Password, SessionIssuer, SessionIssuerError, SessionPayload};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use super::API_KEY_HEADER;

const TOKEN_PATH: &str = "/auth/v1/token";
const PASSWORD_GRANT: &str = "password";

/// Issues sessions through the backend's password-grant token endpoint.
///
/// Calls the endpoint directly with the public anon key rather than through
/// any client SDK, so the session body can be forwarded untouched.
#[derive(Clone)]
pub struct GoTrueSessionClient {
    http_client: Client,
    base_url: String,
    anon_key: Secret<String>,
}

impl GoTrueSessionClient {
    pub fn new(base_url: String, anon_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            anon_key,
        }
    }
}

#[derive(serde::Serialize, Debug)]
struct PasswordGrantRequest<'a> {
    grant_type: &'a str,
    email: &'a str,
    password: &'a str,
}

#[async_trait::async_trait]
impl SessionIssuer for GoTrueSessionClient {
    #[tracing::instrument(name = "Issuing session", skip_all)]
    async fn issue(
        &self,
        email: &InternalEmail,
        password: &Password,
    ) -> Result<SessionPayload, SessionIssuerError> {
        let base =
            Url::parse(&self.base_url).map_err(|e| SessionIssuerError::Backend(e.to_string()))?;
        let url = base
            .join(TOKEN_PATH)
            .map_err(|e| SessionIssuerError::Backend(e.to_string()))?;

        let request_body = PasswordGrantRequest {
            grant_type: PASSWORD_GRANT,
            email: email.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .query(&[("grant_type", PASSWORD_GRANT)])
            .header(API_KEY_HEADER, self.anon_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SessionIssuerError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "password grant rejected");
            return Err(SessionIssuerError::Rejected);
        }

        let session: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SessionIssuerError::Backend(e.to_string()))?;

        Ok(SessionPayload::new(session))
    }
}
