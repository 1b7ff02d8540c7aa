use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use usergate_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id hasher. Hashing and verification run on the blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let hash = compute_password_hash(password.clone())
            .await
            .map_err(PasswordHasherError)?;

        PasswordHash::parse(hash).map_err(|e| PasswordHasherError(e.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Secret<String>,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        verify_password_hash(expected.as_ref().clone(), candidate.clone())
            .await
            .map_err(PasswordHasherError)
    }
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<bool, String> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash =
                password_hash::PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            match argon2()?.verify_password(
                password_candidate.expose_secret().as_bytes(),
                &expected_password_hash,
            ) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(e.to_string()),
            }
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            argon2()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
