use serde::{Deserialize, Serialize};

/// Session object minted by the backend's token endpoint.
///
/// Forwarded to the caller verbatim as JSON (access token, refresh token and
/// whatever metadata the backend includes). This service never inspects,
/// validates or mints token material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionPayload(serde_json::Value);

impl SessionPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
