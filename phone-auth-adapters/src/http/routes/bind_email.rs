use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use phone_auth_application::BindEmailUseCase;
use phone_auth_core::{BearerToken, IdentityAdmin, IdentityResolver, Password};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::{AuthApiError, MISSING_AUTH_HEADER, PASSWORD_REQUIRED};

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Default, Deserialize)]
pub struct BindEmailRequest {
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Serialize)]
pub struct BindEmailResponse {
    pub ok: bool,
}

/// Email binding route.
///
/// The Authorization header is checked before the body is parsed, and a
/// malformed body is treated as an empty request rather than a hard failure,
/// so it falls through to the missing-password response.
#[tracing::instrument(name = "Bind email credentials", skip_all)]
pub async fn bind_email<R, A>(
    State((identity_resolver, identity_admin, reserved_domain)): State<(R, A, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: IdentityResolver + Clone + 'static,
    A: IdentityAdmin + Clone + 'static,
{
    let token =
        bearer_token(&headers).ok_or(AuthApiError::Unauthorized(MISSING_AUTH_HEADER))?;

    let request: BindEmailRequest = serde_json::from_slice(&body).unwrap_or_default();

    let password = request
        .password
        .and_then(|password| Password::try_from(password).ok())
        .ok_or_else(|| AuthApiError::Validation(PASSWORD_REQUIRED.to_string()))?;

    let use_case = BindEmailUseCase::new(identity_resolver, identity_admin, reserved_domain);
    use_case.execute(token, password).await?;

    Ok((StatusCode::OK, Json(BindEmailResponse { ok: true })))
}

fn bearer_token(headers: &HeaderMap) -> Option<BearerToken> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?;
    Some(BearerToken::new(Secret::new(token.to_string())))
}
