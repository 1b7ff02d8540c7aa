use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use usergate_adapters::{config::DatabaseSettings, persistence::MIGRATOR};

/// Configure and return a PostgreSQL connection pool
///
/// Connects using the database settings and runs all pending migrations.
pub async fn configure_postgresql(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    MIGRATOR.run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
