//! Registration input validation.

use serde::Deserialize;

use super::error::{FieldErrors, RegistrationError};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;

/// Registration request body. Missing fields are reported by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A registration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    /// Check every field, collecting one message per invalid field.
    pub fn validate(self) -> Result<ValidRegistration, RegistrationError> {
        let mut errors = FieldErrors::new();

        if let Some(message) = check_username(self.username.as_deref()) {
            errors.insert("username", message.to_string());
        }
        if let Some(message) = check_email(self.email.as_deref()) {
            errors.insert("email", message.to_string());
        }
        if let Some(message) = check_password(self.password.as_deref()) {
            errors.insert("password", message.to_string());
        }

        match (self.username, self.email, self.password) {
            (Some(username), Some(email), Some(password)) if errors.is_empty() => {
                Ok(ValidRegistration {
                    username,
                    email,
                    password,
                })
            }
            _ => Err(RegistrationError::Invalid(errors)),
        }
    }
}

fn check_username(username: Option<&str>) -> Option<&'static str> {
    let username = match username {
        None | Some("") => return Some("Username is required"),
        Some(u) => u,
    };
    let len = username.chars().count();
    if len < USERNAME_MIN {
        return Some("Username must be at least 3 characters");
    }
    if len > USERNAME_MAX {
        return Some("Username cannot exceed 50 characters");
    }
    if !username.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Some("Username can only contain letters, numbers and underscores");
    }
    None
}

fn check_email(email: Option<&str>) -> Option<&'static str> {
    match email {
        None | Some("") => Some("Email is required"),
        Some(e) if !looks_like_email(e) => Some("Invalid email format"),
        Some(_) => None,
    }
}

fn check_password(password: Option<&str>) -> Option<&'static str> {
    match password {
        None | Some("") => Some("Password is required"),
        Some(p) if p.chars().count() < PASSWORD_MIN => {
            Some("Password must be at least 6 characters")
        }
        Some(_) => None,
    }
}

/// `local@domain.tld`: a non-empty local part and a dotted domain with no whitespace.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}
