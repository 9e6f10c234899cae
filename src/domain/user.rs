use super::email::Email;
use crate::error::{CapabilityError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw input for creating a user, as received from a caller.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A registered user.
///
/// Users are identified by their email address. The password is never kept in
/// clear text and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub name: String,
    pub email: Email,
    #[serde(skip)]
    password_hash: String,
}

impl User {
    /// Validates the request and builds a new user.
    pub fn create(request: &UserRequest) -> Result<Self> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(CapabilityError::Validation(
                "User name must not be empty".to_string(),
            ));
        }
        let email = Email::parse(&request.email)?;
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CapabilityError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            email,
            password_hash: hash_password(&request.password),
        })
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        hash_password(candidate) == self.password_hash
    }
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
