use phone_auth_core::{
    IdentityAdmin, IdentityAdminError, InternalEmail, Password, UserId,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use super::API_KEY_HEADER;

const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users/";
const REJECTION_FALLBACK: &str = "Failed to set email/password";

/// Privileged credential overwrite through the backend's admin API.
#[derive(Clone)]
pub struct GoTrueIdentityAdmin {
    http_client: Client,
    base_url: String,
    service_key: Secret<String>,
}

impl GoTrueIdentityAdmin {
    pub fn new(base_url: String, service_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            service_key,
        }
    }
}

#[derive(serde::Serialize, Debug)]
struct UpdateUserRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// The admin API spells its error message differently across versions.
#[derive(serde::Deserialize, Default)]
struct AdminErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl AdminErrorBody {
    fn into_message(self) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .unwrap_or_else(|| REJECTION_FALLBACK.to_string())
    }
}

#[async_trait::async_trait]
impl IdentityAdmin for GoTrueIdentityAdmin {
    #[tracing::instrument(name = "Binding email credentials", skip_all, fields(user_id = %user_id))]
    async fn bind_email_credentials(
        &self,
        user_id: &UserId,
        email: &InternalEmail,
        password: &Password,
    ) -> Result<(), IdentityAdminError> {
        let base =
            Url::parse(&self.base_url).map_err(|e| IdentityAdminError::Backend(e.to_string()))?;
        let url = base
            .join(ADMIN_USERS_PATH)
            .and_then(|users| users.join(user_id.as_str()))
            .map_err(|e| IdentityAdminError::Backend(e.to_string()))?;

        let request_body = UpdateUserRequest {
            email: email.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .put(url)
            .header(API_KEY_HEADER, self.service_key.expose_secret())
            .bearer_auth(self.service_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityAdminError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: AdminErrorBody = response.json().await.unwrap_or_default();
            let message = body.into_message();
            tracing::warn!(status = %status, message = %message, "admin update rejected");
            return Err(IdentityAdminError::Rejected(message));
        }

        Ok(())
    }
}
