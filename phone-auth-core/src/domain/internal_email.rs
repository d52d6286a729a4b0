use super::user_id::UserId;

/// Reserved domain suffix used when no override is configured.
///
/// Changing this breaks every credential already registered through the
/// binding endpoint, so it is part of the wire contract, not a tunable.
pub const DEFAULT_RESERVED_DOMAIN: &str = "phone.gabay";

/// Proxy email identity for a phone-verified account.
///
/// The backend requires an email for its password grant, so each user gets
/// `<user_id>@<reserved_domain>`. The mapping is a pure function of the user
/// id and the domain: no randomness, no lookup, and it is injective because
/// user ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalEmail(String);

impl InternalEmail {
    pub fn derive(user_id: &UserId, reserved_domain: &str) -> Self {
        Self(format!("{}@{}", user_id.as_str(), reserved_domain))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InternalEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
