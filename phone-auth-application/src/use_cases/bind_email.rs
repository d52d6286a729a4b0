use phone_auth_core::{
    BearerToken, IdentityAdmin, IdentityAdminError, IdentityResolver, InternalEmail, Password,
};

/// Shown when the backend rejects the update without a usable message.
const UPDATE_FALLBACK_MESSAGE: &str = "Failed to set email/password";

/// Error types specific to the email binding use case
#[derive(Debug, thiserror::Error)]
pub enum BindEmailError {
    #[error("Invalid or expired session")]
    InvalidSession,
    /// Carries the backend's rejection message for the caller to display.
    #[error("{0}")]
    UpdateRejected(String),
}

/// Email binding use case - fixes a phone-verified account's backend
/// credentials to the derived internal email plus the supplied password
///
/// Repeating the operation with the same password is a state no-op; the
/// backend serializes concurrent updates to the same user record.
pub struct BindEmailUseCase<R, A>
where
    R: IdentityResolver,
    A: IdentityAdmin,
{
    identity_resolver: R,
    identity_admin: A,
    reserved_domain: String,
}

impl<R, A> BindEmailUseCase<R, A>
where
    R: IdentityResolver,
    A: IdentityAdmin,
{
    pub fn new(identity_resolver: R, identity_admin: A, reserved_domain: String) -> Self {
        Self {
            identity_resolver,
            identity_admin,
            reserved_domain,
        }
    }

    /// Execute the email binding use case
    ///
    /// # Arguments
    /// * `token` - The caller's bearer token, resolved to a user id
    /// * `password` - The new password to bind alongside the internal email
    #[tracing::instrument(name = "BindEmailUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: BearerToken,
        password: Password,
    ) -> Result<(), BindEmailError> {
        let user_id = self
            .identity_resolver
            .resolve(&token)
            .await
            .map_err(|_| BindEmailError::InvalidSession)?;

        let internal_email = InternalEmail::derive(&user_id, &self.reserved_domain);

        self.identity_admin
            .bind_email_credentials(&user_id, &internal_email, &password)
            .await
            .map_err(|error| match error {
                IdentityAdminError::Rejected(message) => BindEmailError::UpdateRejected(message),
                IdentityAdminError::Backend(detail) => {
                    tracing::warn!(error = %detail, "credential update transport failure");
                    BindEmailError::UpdateRejected(UPDATE_FALLBACK_MESSAGE.to_string())
                }
            })
    }
}
