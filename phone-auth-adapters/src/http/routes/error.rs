use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use phone_auth_application::{BindEmailError, PhoneLoginError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Canonical client-facing messages. The 401 texts are deliberately generic
// so responses reveal nothing about which accounts exist.
pub const PHONE_AND_PASSWORD_REQUIRED: &str = "phone and password are required";
pub const PASSWORD_REQUIRED: &str = "password is required";
pub const INVALID_PHONE_CREDENTIALS: &str = "Invalid phone or password";
pub const MISSING_AUTH_HEADER: &str = "Missing or invalid Authorization header";
pub const INVALID_SESSION: &str = "Invalid or expired session";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SERVER_ERROR: &str = "Server error";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Closed set of error kinds leaving the HTTP boundary.
///
/// Every failure from the ports or use cases is mapped into one of these
/// before it reaches a caller; backend bodies and transport errors are
/// logged inside the adapters and never surfaced (the one exception being
/// the admin update's rejection message, which is part of the contract).
#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("Server configuration error")]
    Config,

    #[error("{0}")]
    Downstream(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::Validation(_) | AuthApiError::Downstream(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            AuthApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),

            AuthApiError::Config | AuthApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<PhoneLoginError> for AuthApiError {
    fn from(error: PhoneLoginError) -> Self {
        match error {
            PhoneLoginError::InvalidCredentials => {
                AuthApiError::Unauthorized(INVALID_PHONE_CREDENTIALS)
            }
            PhoneLoginError::SessionBackend(_) => AuthApiError::Internal(LOGIN_FAILED),
        }
    }
}

impl From<BindEmailError> for AuthApiError {
    fn from(error: BindEmailError) -> Self {
        match error {
            BindEmailError::InvalidSession => AuthApiError::Unauthorized(INVALID_SESSION),
            BindEmailError::UpdateRejected(message) => AuthApiError::Downstream(message),
        }
    }
}
