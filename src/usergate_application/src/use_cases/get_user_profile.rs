use usergate_core::{UserId, UserStore, UserStoreError};

use super::user_profile::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum GetUserProfileError {
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Looks up the profile of an already authenticated user
pub struct GetUserProfileUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> GetUserProfileUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetUserProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId) -> Result<UserProfile, GetUserProfileError> {
        self.user_store
            .find_by_id(&id)
            .await?
            .as_ref()
            .map(UserProfile::from)
            .ok_or(GetUserProfileError::UserNotFound)
    }
}
