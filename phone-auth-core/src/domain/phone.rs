use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhoneError {
    #[error("Phone must not be empty")]
    Empty,
}

/// A caller-supplied phone number.
///
/// Surrounding whitespace is stripped on construction. No format is imposed
/// beyond non-emptiness; the backend owns the phone credential record and is
/// the only party that can say whether a number exists. Wrapped in `Secret`
/// so the number never ends up in logs or debug output.
#[derive(Debug, Clone)]
pub struct Phone(Secret<String>);

impl TryFrom<Secret<String>> for Phone {
    type Error = PhoneError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let trimmed = value.expose_secret().trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }
        Ok(Self(Secret::new(trimmed.to_string())))
    }
}

impl AsRef<Secret<String>> for Phone {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
