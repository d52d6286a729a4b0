pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    bearer_token::BearerToken,
    internal_email::{DEFAULT_RESERVED_DOMAIN, InternalEmail},
    password::{Password, PasswordError},
    phone::{Phone, PhoneError},
    session::SessionPayload,
    user_id::{UserId, UserIdError},
};

pub use ports::services::{
    CredentialVerifier, CredentialVerifierError, IdentityAdmin, IdentityAdminError,
    IdentityResolver, IdentityResolverError, SessionIssuer, SessionIssuerError,
};
