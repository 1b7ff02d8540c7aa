use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordHasherError(pub String);

/// Port trait for one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Compare a candidate against a stored hash in constant time.
    ///
    /// A mismatch is `Ok(false)`; `Err` means the comparison itself could not run.
    async fn verify(
        &self,
        candidate: &Secret<String>,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
