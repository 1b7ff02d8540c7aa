use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::error::ValidationError;

pub const MAX_EMAIL_LENGTH: usize = 255;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: Secret<String>) -> Result<Self, ValidationError> {
        validate_email(email.expose_secret())?;
        Ok(Self(email))
    }
}

pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    if !email.contains('@') {
        return Err(ValidationError::EmailMissingAtSign);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong {
            max: MAX_EMAIL_LENGTH,
        });
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(())
}

impl TryFrom<Secret<String>> for Email {
    type Error = ValidationError;

    fn try_from(email: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(email)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
