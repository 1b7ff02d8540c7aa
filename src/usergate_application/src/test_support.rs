use std::collections::HashMap;
use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use usergate_core::{
    Email, Password, PasswordHash, PasswordHasher, PasswordHasherError, User, UserId, UserStore,
    UserStoreError,
};

// Mock user store for testing
#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MockUserStore {
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn save(&self, user: &User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }
}

/// Store whose every call fails, for infrastructure error paths.
#[derive(Clone)]
pub struct UnavailableUserStore;

#[async_trait::async_trait]
impl UserStore for UnavailableUserStore {
    async fn save(&self, _user: &User) -> Result<(), UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_owned()))
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_owned()))
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_owned()))
    }
}

/// Reversible "hash" so tests can assert on what was stored.
#[derive(Clone)]
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let hashed = format!("hashed:{}", password.as_ref().expose_secret());
        PasswordHash::parse(Secret::from(hashed)).map_err(|e| PasswordHasherError(e.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Secret<String>,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let hashed = format!("hashed:{}", candidate.expose_secret());
        Ok(&hashed == expected.as_ref().expose_secret())
    }
}

pub fn email(value: &str) -> Email {
    Email::try_from(Secret::from(value.to_owned())).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::from(value.to_owned())).unwrap()
}
