mod phone_auth_service;
mod tracing;

pub use phone_auth_service::PhoneAuthService;

// Re-export commonly used types
pub use phone_auth_core::{CredentialVerifier, IdentityAdmin, IdentityResolver, SessionIssuer};
