use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, migrate::Migrator};
use usergate_core::{Email, User, UserId, UserStore, UserStoreError};
use uuid::Uuid;

/// Schema migrations for the `users` table.
pub static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        User::reconstruct(
            UserId::from(self.id),
            self.name,
            Secret::from(self.email),
            Secret::from(self.password_hash),
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save(&self, user: &User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.name())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.password_hash().as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}
