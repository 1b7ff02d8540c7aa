use std::collections::HashMap;
use std::path::Path;

use axum::http::HeaderValue;
use config::{Config, ConfigError, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{CONFIG_DIR, defaults, env};
use crate::auth::SessionConfig;

/// Execution mode. Only affects how much detail unexpected errors log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `development` or `production`."
            )),
        }
    }
}

/// CORS origins. An empty list allows any origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn allows_any(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.allows_any()
            || origin
                .to_str()
                .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub jwt_secret: Secret<String>,
    pub access_token_ttl_in_seconds: i64,
    pub refresh_token_ttl_in_seconds: i64,
    pub refresh_cookie_name: String,
}

impl SessionSettings {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            jwt_secret: self.jwt_secret.clone(),
            access_token_ttl_in_seconds: self.access_token_ttl_in_seconds,
            refresh_token_ttl_in_seconds: self.refresh_token_ttl_in_seconds,
            refresh_cookie_name: self.refresh_cookie_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
}

impl Settings {
    /// Load settings from `./config`, `.env` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::current_dir()
            .map_err(|e| ConfigError::Message(e.to_string()))?
            .join(CONFIG_DIR);

        Self::load_from(&config_dir, std::env::vars().collect())
    }

    /// Layering, lowest precedence first: built-in defaults, `base` file,
    /// `<environment>` file, `APP_*` variables, then the well-known
    /// `PORT` / `DATABASE_URL` / `JWT_SECRET_KEY` variables.
    ///
    /// The environment comes from `APP_ENVIRONMENT`, falling back to `NODE_ENV`.
    pub fn load_from(
        config_dir: &Path,
        env_vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let environment = env_vars
            .get(env::APP_ENVIRONMENT_ENV_VAR)
            .or_else(|| env_vars.get(env::NODE_ENV_VAR))
            .cloned()
            .map(Environment::try_from)
            .transpose()
            .map_err(ConfigError::Message)?
            .unwrap_or_default();

        let settings: Settings = Config::builder()
            .set_default("application.host", defaults::HOST)?
            .set_default("application.port", i64::from(defaults::PORT))?
            .set_default(
                "database.max_connections",
                i64::from(defaults::DATABASE_MAX_CONNECTIONS),
            )?
            .set_default(
                "session.access_token_ttl_in_seconds",
                defaults::ACCESS_TOKEN_TTL_IN_SECONDS,
            )?
            .set_default(
                "session.refresh_token_ttl_in_seconds",
                defaults::REFRESH_TOKEN_TTL_IN_SECONDS,
            )?
            .set_default("session.refresh_cookie_name", defaults::REFRESH_COOKIE_NAME)?
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true)
                    .source(Some(env_vars.clone())),
            )
            .set_override_option("application.port", env_vars.get(env::PORT_ENV_VAR).cloned())?
            .set_override_option(
                "database.url",
                env_vars.get(env::DATABASE_URL_ENV_VAR).cloned(),
            )?
            .set_override_option(
                "session.jwt_secret",
                env_vars.get(env::JWT_SECRET_ENV_VAR).cloned(),
            )?
            .set_override("environment", environment.as_str())?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.expose_secret().trim().is_empty() {
            return Err(ConfigError::Message(
                "database.url must not be empty".to_string(),
            ));
        }

        if self.session.jwt_secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::Message(
                "session.jwt_secret must not be empty".to_string(),
            ));
        }

        if self.session.access_token_ttl_in_seconds <= 0
            || self.session.refresh_token_ttl_in_seconds <= 0
        {
            return Err(ConfigError::Message(
                "session token TTLs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
