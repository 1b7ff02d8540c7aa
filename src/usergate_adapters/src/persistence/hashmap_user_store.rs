use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use usergate_core::{Email, User, UserId, UserStore, UserStoreError};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    id_by_email: HashMap<Email, UserId>,
}

/// In-memory user store. Both indexes live behind one lock so the email
/// uniqueness check and the insert are atomic.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn save(&self, user: &User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.by_id.contains_key(user.id()) || users.id_by_email.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.id_by_email.insert(user.email().clone(), *user.id());
        users.by_id.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.by_id.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .id_by_email
            .get(email)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }
}
