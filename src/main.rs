use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use usergate::{
    Argon2PasswordHasher, PostgresUserStore, SessionIssuer, Settings, UserService,
    configure_postgresql,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;
    tracing::info!(environment = settings.environment.as_str(), "Settings loaded");

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&settings.database).await?;

    let user_service = UserService::new(
        PostgresUserStore::new(pg_pool),
        Argon2PasswordHasher::new(),
        SessionIssuer::new(settings.session.session_config()),
        settings.environment,
    );

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;

    user_service
        .run_standalone(listener, settings.application.allowed_origins)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
