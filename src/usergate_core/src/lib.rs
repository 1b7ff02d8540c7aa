pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    error::ValidationError,
    password::{Password, PasswordHash},
    user::User,
    user_id::UserId,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError},
};
