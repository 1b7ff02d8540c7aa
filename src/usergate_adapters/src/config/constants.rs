pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    /// Read when `APP_ENVIRONMENT` is unset.
    pub const NODE_ENV_VAR: &str = "NODE_ENV";
    pub const PORT_ENV_VAR: &str = "PORT";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET_KEY";
    /// Prefix for structured overrides, e.g. `APP_SESSION__ACCESS_TOKEN_TTL_IN_SECONDS`.
    pub const SETTINGS_ENV_PREFIX: &str = "APP";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 4000;
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    pub const ACCESS_TOKEN_TTL_IN_SECONDS: i64 = 10 * 60;
    pub const REFRESH_TOKEN_TTL_IN_SECONDS: i64 = 7 * 24 * 60 * 60;
    pub const REFRESH_COOKIE_NAME: &str = "refreshToken";
}

pub const CONFIG_DIR: &str = "config";

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret";
}
