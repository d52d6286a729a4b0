pub mod bind_email;
pub mod error;
pub mod phone_login;

pub use bind_email::{BindEmailRequest, BindEmailResponse, bind_email};
pub use error::{AuthApiError, ErrorResponse};
pub use phone_login::{PhoneLoginRequest, phone_login};

/// Plain acknowledgment for bare OPTIONS probes. Browser preflights carry
/// the CORS request headers and are answered by the CORS layer before they
/// reach this handler.
pub async fn preflight() -> &'static str {
    "ok"
}

/// Fallback for any method other than POST/OPTIONS on the two endpoints.
pub async fn method_not_allowed() -> AuthApiError {
    AuthApiError::MethodNotAllowed
}
