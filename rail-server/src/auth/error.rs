//! Authentication and registration errors.

use std::collections::BTreeMap;

/// Per-field messages, keyed by request field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Error returned when a request cannot be authenticated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingCredentials,

    #[error("malformed Authorization header: {0}")]
    MalformedCredentials(&'static str),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Error returned when a registration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// One or more fields failed validation.
    #[error("invalid registration: {0:?}")]
    Invalid(FieldErrors),

    /// The username or email is already in use.
    #[error("registration conflict: {0:?}")]
    Conflict(FieldErrors),
}

impl RegistrationError {
    pub(crate) fn conflict(field: &'static str, message: &str) -> Self {
        RegistrationError::Conflict(BTreeMap::from([(field, message.to_string())]))
    }

    /// The per-field messages, whichever the variant.
    pub fn fields(&self) -> &FieldErrors {
        match self {
            RegistrationError::Invalid(fields) | RegistrationError::Conflict(fields) => fields,
        }
    }
}
