//! Users, registration and HTTP Basic authentication.

mod basic;
mod error;
mod password;
mod registration;
mod store;
mod user;

pub use basic::Credentials;
pub use error::{AuthError, FieldErrors, RegistrationError};
pub use password::{PasswordHash, PasswordHashError};
pub use registration::{RegistrationRequest, ValidRegistration};
pub use store::{InMemoryUserStore, UserStore};
pub use user::{Role, User};
