use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use phone_auth_application::PhoneLoginUseCase;
use phone_auth_core::{CredentialVerifier, Password, Phone, SessionIssuer};
use secrecy::Secret;
use serde::Deserialize;

use super::error::{AuthApiError, PHONE_AND_PASSWORD_REQUIRED};

#[derive(Debug, Deserialize)]
pub struct PhoneLoginRequest {
    #[serde(default)]
    pub phone: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

/// Phone login route.
///
/// Validates presence of both fields before any backend call is made, then
/// hands off to the use case. The successful response is the backend's
/// session object, forwarded verbatim.
#[tracing::instrument(name = "Phone login", skip_all)]
pub async fn phone_login<V, S>(
    State((verifier, session_issuer, reserved_domain)): State<(V, S, String)>,
    payload: Result<Json<PhoneLoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    V: CredentialVerifier + Clone + 'static,
    S: SessionIssuer + Clone + 'static,
{
    // A syntactically broken body is a validation error naming the problem,
    // not a generic failure.
    let Json(request) =
        payload.map_err(|rejection| AuthApiError::Validation(rejection.body_text()))?;

    let phone = request
        .phone
        .and_then(|phone| Phone::try_from(phone).ok())
        .ok_or_else(|| AuthApiError::Validation(PHONE_AND_PASSWORD_REQUIRED.to_string()))?;

    let password = request
        .password
        .and_then(|password| Password::try_from(password).ok())
        .ok_or_else(|| AuthApiError::Validation(PHONE_AND_PASSWORD_REQUIRED.to_string()))?;

    let use_case = PhoneLoginUseCase::new(verifier, session_issuer, reserved_domain);
    let session = use_case.execute(phone, password).await?;

    Ok((StatusCode::OK, Json(session)))
}
