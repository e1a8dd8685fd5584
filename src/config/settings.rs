use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Required environment variable {0} is not set")]
    MissingVar(String),

    #[error("Environment variable {0} has an invalid value: {1}")]
    InvalidVar(String, String),
}

/// Immutable application settings loaded once at startup.
///
/// The JWT secret is injected into the token service from here; nothing
/// reads it from ambient state later.
#[derive(Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_expiration_hours: i64,
    pub bind_address: String,

    /// Optional bootstrap admin account, created at startup when both are
    /// set and the email is not yet registered.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl AppSettings {
    /// Load settings from environment variables.
    ///
    /// `JWT_SECRET` is required; everything else has a sensible default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://sales.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| SettingsError::MissingVar("JWT_SECRET".to_string()))?;

        let token_expiration_hours = match env::var("TOKEN_EXPIRATION_HOURS") {
            Ok(raw) => raw.parse().map_err(|_| {
                SettingsError::InvalidVar("TOKEN_EXPIRATION_HOURS".to_string(), raw.clone())
            })?,
            Err(_) => 24,
        };

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            token_expiration_hours,
            bind_address,
            admin_email: env::var("ADMIN_EMAIL").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("token_expiration_hours", &self.token_expiration_hours)
            .field("bind_address", &self.bind_address)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
