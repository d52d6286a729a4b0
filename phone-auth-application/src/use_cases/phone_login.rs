use phone_auth_core::{
    CredentialVerifier, CredentialVerifierError, InternalEmail, Password, Phone, SessionIssuer,
    SessionIssuerError, SessionPayload,
};

/// Error types specific to the phone login use case
#[derive(Debug, thiserror::Error)]
pub enum PhoneLoginError {
    /// Wrong password, unknown phone and verification backend failure all
    /// collapse into this variant so callers cannot probe which phone
    /// numbers are registered.
    #[error("Invalid phone or password")]
    InvalidCredentials,
    #[error("Token backend error: {0}")]
    SessionBackend(String),
}

/// Phone login use case - exchanges phone credentials for a backend session
///
/// Two sequential backend calls: verify the phone+password pair, then trade
/// the derived internal email plus the same password for a real session.
pub struct PhoneLoginUseCase<V, S>
where
    V: CredentialVerifier,
    S: SessionIssuer,
{
    verifier: V,
    session_issuer: S,
    reserved_domain: String,
}

impl<V, S> PhoneLoginUseCase<V, S>
where
    V: CredentialVerifier,
    S: SessionIssuer,
{
    pub fn new(verifier: V, session_issuer: S, reserved_domain: String) -> Self {
        Self {
            verifier,
            session_issuer,
            reserved_domain,
        }
    }

    /// Execute the phone login use case
    ///
    /// # Returns
    /// The backend session payload on success, to be forwarded verbatim.
    #[tracing::instrument(name = "PhoneLoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        phone: Phone,
        password: Password,
    ) -> Result<SessionPayload, PhoneLoginError> {
        let user_id = self
            .verifier
            .verify(&phone, &password)
            .await
            .map_err(|error| match error {
                CredentialVerifierError::NoMatch | CredentialVerifierError::Backend(_) => {
                    PhoneLoginError::InvalidCredentials
                }
            })?;

        let internal_email = InternalEmail::derive(&user_id, &self.reserved_domain);

        self.session_issuer
            .issue(&internal_email, &password)
            .await
            .map_err(|error| match error {
                // A rejected grant looks exactly like a failed verification.
                SessionIssuerError::Rejected => PhoneLoginError::InvalidCredentials,
                SessionIssuerError::Backend(message) => PhoneLoginError::SessionBackend(message),
            })
    }
}
