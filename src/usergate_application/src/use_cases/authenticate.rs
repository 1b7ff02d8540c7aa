use secrecy::Secret;
use usergate_core::{Email, PasswordHasher, PasswordHasherError, UserStore, UserStoreError};

use super::user_profile::UserProfile;

/// Error types specific to authenticate use case
#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    /// Unknown email and wrong password both land here.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Authenticate use case - verifies email and password
pub struct AuthenticateUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> AuthenticateUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the authenticate use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - Candidate password, checked as-is against the stored hash
    ///
    /// # Returns
    /// The user's public profile, or `AuthenticateError::InvalidCredentials`
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: Secret<String>,
    ) -> Result<UserProfile, AuthenticateError> {
        let Some(user) = self.user_store.find_by_email(&email).await? else {
            return Err(AuthenticateError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify(&password, user.password_hash())
            .await?;

        if !matches {
            return Err(AuthenticateError::InvalidCredentials);
        }

        Ok(UserProfile::from(&user))
    }
}
