//! HTTP Basic credentials.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::AuthError;
use super::store::UserStore;
use super::user::User;

/// Username and password taken from an `Authorization: Basic` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Parse the value of an `Authorization` header.
    pub fn from_header(value: &str) -> Result<Self, AuthError> {
        let encoded = value
            .strip_prefix("Basic ")
            .ok_or(AuthError::MalformedCredentials("expected Basic scheme"))?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::MalformedCredentials("invalid base64"))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthError::MalformedCredentials("credentials are not UTF-8"))?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(AuthError::MalformedCredentials("missing ':' separator"))?;

        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Look the user up and check the password.
    pub fn authenticate(&self, store: &dyn UserStore) -> Result<User, AuthError> {
        store
            .find_by_username(&self.username)
            .filter(|user| user.password_hash.verify(&self.password))
            .ok_or(AuthError::InvalidCredentials)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{InMemoryUserStore, PasswordHash, Role};

    fn header(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_basic_header() {
        let creds = Credentials::from_header(&header("alice:s3cret:with:colons")).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "s3cret:with:colons");
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            Credentials::from_header("Bearer abc"),
            Err(AuthError::MalformedCredentials("expected Basic scheme"))
        );
    }

    #[test]
    fn rejects_bad_encoding() {
        assert!(Credentials::from_header("Basic !!!").is_err());
        assert_eq!(
            Credentials::from_header(&header("no-separator")),
            Err(AuthError::MalformedCredentials("missing ':' separator"))
        );
    }

    #[test]
    fn authenticates_against_store() {
        let store = InMemoryUserStore::new();
        store
            .insert(User::new(
                "alice",
                "alice@example.com",
                PasswordHash::new("secret1").unwrap(),
                vec![Role::Api],
            ))
            .unwrap();

        let good = Credentials::from_header(&header("alice:secret1")).unwrap();
        assert_eq!(good.authenticate(&store).unwrap().username, "alice");

        let wrong = Credentials::from_header(&header("alice:secret2")).unwrap();
        assert!(matches!(
            wrong.authenticate(&store),
            Err(AuthError::InvalidCredentials)
        ));

        let unknown = Credentials::from_header(&header("bob:secret1")).unwrap();
        assert!(unknown.authenticate(&store).is_err());
    }
}
