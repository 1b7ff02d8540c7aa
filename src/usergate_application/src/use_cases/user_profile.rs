use usergate_core::{Email, User, UserId};

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id(),
            name: user.name().to_owned(),
            email: user.email().clone(),
        }
    }
}
