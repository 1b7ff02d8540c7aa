use secrecy::{ExposeSecret, Secret};

use super::error::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password that satisfies the registration policy.
///
/// This is the only input a [`crate::PasswordHasher`] accepts, so every
/// [`PasswordHash`] produced by hashing came from a policy-conforming password.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, ValidationError> {
        let exposed = password.expose_secret();

        if exposed.trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }

        if exposed.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(password: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// One-way hash of a password, in whatever encoding the hasher emits.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn parse(hash: Secret<String>) -> Result<Self, ValidationError> {
        if hash.expose_secret().trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Self(hash))
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
