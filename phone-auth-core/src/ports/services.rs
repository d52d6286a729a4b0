//! Gateway traits for the external authentication backend.
//!
//! All durable state lives behind these four ports; this service holds
//! nothing between requests. Each port gets its own error enum so the
//! handlers can map failures onto the closed API error set without
//! inspecting strings.

use thiserror::Error;

use crate::domain::{
    bearer_token::BearerToken, internal_email::InternalEmail, password::Password, phone::Phone,
    session::SessionPayload, user_id::UserId,
};

#[derive(Debug, Error)]
pub enum CredentialVerifierError {
    #[error("No account matches the supplied phone credentials")]
    NoMatch,
    #[error("Verification backend error: {0}")]
    Backend(String),
}

/// Validates a phone+password pair against the backend's credential records.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        phone: &Phone,
        password: &Password,
    ) -> Result<UserId, CredentialVerifierError>;
}

#[derive(Debug, Error)]
pub enum SessionIssuerError {
    #[error("Password grant rejected by the backend")]
    Rejected,
    #[error("Token backend error: {0}")]
    Backend(String),
}

/// Exchanges email+password for a session via the backend's password grant.
#[async_trait::async_trait]
pub trait SessionIssuer: Send + Sync {
    async fn issue(
        &self,
        email: &InternalEmail,
        password: &Password,
    ) -> Result<SessionPayload, SessionIssuerError>;
}

#[derive(Debug, Error)]
pub enum IdentityResolverError {
    #[error("Invalid or expired session")]
    InvalidSession,
    #[error("Identity backend error: {0}")]
    Backend(String),
}

/// Resolves a caller-presented bearer token to the backend user it belongs to.
#[async_trait::async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token: &BearerToken) -> Result<UserId, IdentityResolverError>;
}

#[derive(Debug, Error)]
pub enum IdentityAdminError {
    /// The backend refused the update; carries the backend's own message.
    #[error("{0}")]
    Rejected(String),
    #[error("Admin backend error: {0}")]
    Backend(String),
}

/// Privileged overwrite of a user's email and password in the backend.
#[async_trait::async_trait]
pub trait IdentityAdmin: Send + Sync {
    async fn bind_email_credentials(
        &self,
        user_id: &UserId,
        email: &InternalEmail,
        password: &Password,
    ) -> Result<(), IdentityAdminError>;
}
