//! API user type.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::password::PasswordHash;

/// A role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Access to the routing and statistics API.
    Api,
    /// Every registered user has this.
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Api => "ROLE_API",
            Role::User => "ROLE_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered API user.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: PasswordHash,
    roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: PasswordHash,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash,
            roles,
            created_at: Utc::now(),
        }
    }

    /// Granted roles; always includes [`Role::User`].
    pub fn roles(&self) -> Vec<Role> {
        let mut roles = self.roles.clone();
        if !roles.contains(&Role::User) {
            roles.push(Role::User);
        }
        roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}
