//! Reqwest adapters for the external authentication backend.
//!
//! The backend exposes a PostgREST data API and a GoTrue auth API under one
//! root URL. One adapter per port; all four share a single preconfigured
//! `reqwest::Client`.

pub mod gotrue_identity_admin;
pub mod gotrue_identity_resolver;
pub mod gotrue_session_client;
pub mod postgrest_credential_verifier;

pub use gotrue_identity_admin::GoTrueIdentityAdmin;
pub use gotrue_identity_resolver::GoTrueIdentityResolver;
pub use gotrue_session_client::GoTrueSessionClient;
pub use postgrest_credential_verifier::PostgrestCredentialVerifier;

/// Header carrying the API key on every backend call.
pub(crate) const API_KEY_HEADER: &str = "apikey";
