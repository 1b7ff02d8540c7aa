use secrecy::{ExposeSecret, Secret};

use super::{
    email::{Email, validate_email},
    error::ValidationError,
    password::PasswordHash,
    user_id::UserId,
};

/// A registered user.
///
/// Every constructor and mutator validates the full record, so a `User`
/// value is always in a valid state.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    password_hash: PasswordHash,
}

impl User {
    /// Create a brand new user with a freshly generated id.
    pub fn create(
        name: impl Into<String>,
        email: Email,
        password_hash: PasswordHash,
    ) -> Result<Self, ValidationError> {
        let user = Self {
            id: UserId::new(),
            name: name.into(),
            email,
            password_hash,
        };
        user.validate()?;
        Ok(user)
    }

    /// Rebuild a user from persisted fields.
    pub fn reconstruct(
        id: UserId,
        name: impl Into<String>,
        email: Secret<String>,
        password_hash: Secret<String>,
    ) -> Result<Self, ValidationError> {
        let user = Self {
            id,
            name: name.into(),
            email: Email::parse(email)?,
            password_hash: PasswordHash::parse(password_hash)?,
        };
        user.validate()?;
        Ok(user)
    }

    pub fn update_password(&mut self, password_hash: PasswordHash) -> Result<(), ValidationError> {
        let candidate = Self {
            password_hash,
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn change_email(&mut self, email: Secret<String>) -> Result<(), ValidationError> {
        let candidate = Self {
            email: Email::parse(email)?,
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.password_hash.as_ref().expose_secret().trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }

        validate_email(self.email.as_ref().expose_secret())
    }
}
