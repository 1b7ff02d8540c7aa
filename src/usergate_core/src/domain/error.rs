use thiserror::Error;

/// Reasons a user field can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Email must contain an '@' symbol")]
    EmailMissingAtSign,
    #[error("Email cannot exceed {max} characters")]
    EmailTooLong { max: usize },
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// Name of the input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "name",
            ValidationError::EmptyEmail
            | ValidationError::EmailMissingAtSign
            | ValidationError::EmailTooLong { .. }
            | ValidationError::InvalidEmailFormat => "email",
            ValidationError::EmptyPassword | ValidationError::PasswordTooShort { .. } => {
                "password"
            }
        }
    }
}
