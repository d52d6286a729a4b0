use secrecy::Secret;

/// Caller-presented access token, stripped of its `Bearer ` prefix.
///
/// Opaque to this service: it is only replayed to the backend's identity
/// endpoint to find out who the caller is.
#[derive(Debug, Clone)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }
}

impl AsRef<Secret<String>> for BearerToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
