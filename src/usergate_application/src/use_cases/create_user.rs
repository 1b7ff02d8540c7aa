use usergate_core::{
    Email, Password, PasswordHasher, PasswordHasherError, User, UserId, UserStore,
    UserStoreError, ValidationError,
};

/// Output of a successful registration
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserOutput {
    pub id: UserId,
}

/// Error types for create user use case
#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error("User already exists with this e-mail")]
    AlreadyExistsEmail,
    #[error("{0}")]
    ValidationError(#[from] ValidationError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Create user use case - handles user registration
pub struct CreateUserUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> CreateUserUseCase<U, H>
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

    /// Execute the create user use case
    ///
    /// # Arguments
    /// * `name` - Display name, must not be blank
    /// * `email` - Validated email address, must not be registered yet
    /// * `password` - Validated plaintext password
    ///
    /// # Returns
    /// The id of the stored user, or `CreateUserError::AlreadyExistsEmail` when
    /// the email is taken. A store-level duplicate (two concurrent registrations
    /// passing the lookup) surfaces as `CreateUserError::UserStoreError`.
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip(self, email, password))]
    pub async fn execute(
        &self,
        name: String,
        email: Email,
        password: Password,
    ) -> Result<CreateUserOutput, CreateUserError> {
        if self.user_store.find_by_email(&email).await?.is_some() {
            return Err(CreateUserError::AlreadyExistsEmail);
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let user = User::create(name, email, password_hash)?;

        self.user_store.save(&user).await?;
        tracing::info!(user_id = %user.id(), "User created");

        Ok(CreateUserOutput { id: *user.id() })
    }
}
