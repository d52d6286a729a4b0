use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserIdError {
    #[error("User id must not be empty")]
    Empty,
}

/// Opaque unique identifier assigned by the backend at account creation.
///
/// Never generated or mutated here; this service only carries it between
/// backend calls and into the internal email mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(value))
    }
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
