use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User, user_id::UserId};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence boundary for user records.
///
/// Lookups report absence with `Ok(None)`; errors are reserved for failures.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record. Fails if the id or email is already taken.
    async fn save(&self, user: &User) -> Result<(), UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
}
