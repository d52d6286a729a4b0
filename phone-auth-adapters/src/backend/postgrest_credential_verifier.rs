use phone_auth_core::{CredentialVerifier, CredentialVerifierError, Password, Phone, UserId};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use super::API_KEY_HEADER;

/// Stored procedure that checks a phone+password pair against the
/// credential records and returns the matching user rows.
const VERIFY_RPC_PATH: &str = "/rest/v1/rpc/login_by_phone";

/// Verifies phone credentials through the backend's data API.
#[derive(Clone)]
pub struct PostgrestCredentialVerifier {
    http_client: Client,
    base_url: String,
    service_key: Secret<String>,
}

impl PostgrestCredentialVerifier {
    pub fn new(base_url: String, service_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            service_key,
        }
    }
}

#[derive(serde::Serialize, Debug)]
struct VerifyRequest<'a> {
    p_phone: &'a str,
    p_password: &'a str,
}

#[derive(serde::Deserialize)]
struct UserRow {
    id: Option<String>,
}

#[async_trait::async_trait]
impl CredentialVerifier for PostgrestCredentialVerifier {
    #[tracing::instrument(name = "Verifying phone credentials", skip_all)]
    async fn verify(
        &self,
        phone: &Phone,
        password: &Password,
    ) -> Result<UserId, CredentialVerifierError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| CredentialVerifierError::Backend(e.to_string()))?;
        let url = base
            .join(VERIFY_RPC_PATH)
            .map_err(|e| CredentialVerifierError::Backend(e.to_string()))?;

        let request_body = VerifyRequest {
            p_phone: phone.as_ref().expose_secret(),
            p_password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, self.service_key.expose_secret())
            .bearer_auth(self.service_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CredentialVerifierError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "verification rpc returned an error");
            return Err(CredentialVerifierError::Backend(format!(
                "verification rpc returned {}",
                response.status()
            )));
        }

        let rows: Vec<UserRow> = response
            .json()
            .await
            .map_err(|e| CredentialVerifierError::Backend(e.to_string()))?;

        // The procedure returns zero rows for both unknown phone and wrong
        // password; the distinction never leaves the backend.
        let id = rows
            .into_iter()
            .next()
            .and_then(|row| row.id)
            .ok_or(CredentialVerifierError::NoMatch)?;

        UserId::try_from(id).map_err(|_| CredentialVerifierError::NoMatch)
    }
}
