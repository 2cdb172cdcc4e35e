//! User storage.

use std::collections::HashMap;
use std::sync::RwLock;

use super::error::RegistrationError;
use super::user::User;

/// Persists registered users.
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with a conflict if the username or email is taken.
    fn insert(&self, user: User) -> Result<User, RegistrationError>;

    fn find_by_username(&self, username: &str) -> Option<User>;
}

/// Thread-safe in-memory user store, keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> Result<User, RegistrationError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());

        if users.contains_key(&user.username) {
            return Err(RegistrationError::conflict("username", "Username already taken"));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(RegistrationError::conflict("email", "Email already registered"));
        }

        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(username)
            .cloned()
    }
}
