use std::fmt;
use std::path::PathBuf;

use crate::config::EnvironmentProvider;
use crate::config::errors::SettingsError;

const MIN_SECRET_LENGTH: usize = 32;

/// One year
const MAX_ACCESS_TOKEN_TTL_MINUTES: i64 = 525_600;

/// Secrets loaded from the environment. Never printed.
#[derive(Clone)]
pub struct Secrets {
    jwt_secret: String,
    session_secret: String,
    password_pepper: String,
}

impl Secrets {
    pub fn new(jwt_secret: String, session_secret: String, password_pepper: String) -> Self {
        Self {
            jwt_secret,
            session_secret,
            password_pepper,
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("jwt_secret", &"<redacted>")
            .field("session_secret", &"<redacted>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

/// Application settings, read once at startup
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    /// Admin frontend origin (CORS)
    pub cms_url: Option<String>,

    /// Public site origin (CORS)
    pub public_site_url: Option<String>,

    pub access_token_ttl_minutes: i64,
    pub media_dir: PathBuf,
    pub seed_download_delay_ms: u64,
    pub secrets: Secrets,
}

impl AppSettings {
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, SettingsError> {
        let database_url = optional(env, "DATABASE_URL")
            .unwrap_or_else(|| "sqlite://trailhub.db?mode=rwc".to_string());

        let host = optional(env, "HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(env, "PORT", 3000u16)?;
        if port == 0 {
            return Err(SettingsError::invalid("PORT", "must be between 1 and 65535"));
        }

        let access_token_ttl_minutes = parse_or(env, "ACCESS_TOKEN_TTL_MINUTES", 60i64)?;
        if !(1..=MAX_ACCESS_TOKEN_TTL_MINUTES).contains(&access_token_ttl_minutes) {
            return Err(SettingsError::invalid(
                "ACCESS_TOKEN_TTL_MINUTES",
                format!("must be between 1 and {}", MAX_ACCESS_TOKEN_TTL_MINUTES),
            ));
        }

        let media_dir = optional(env, "MEDIA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("storage/media"));

        let seed_download_delay_ms = parse_or(env, "SEED_DOWNLOAD_DELAY_MS", 500u64)?;

        let secrets = Secrets::new(
            secret(env, "JWT_SECRET")?,
            secret(env, "SESSION_SECRET")?,
            secret(env, "PASSWORD_PEPPER")?,
        );

        Ok(Self {
            database_url,
            host,
            port,
            cms_url: optional(env, "CMS_URL").map(normalize_origin),
            public_site_url: optional(env, "PUBLIC_SITE_URL").map(normalize_origin),
            access_token_ttl_minutes,
            media_dir,
            seed_download_delay_ms,
            secrets,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_env_provider(&crate::config::SystemEnvironment)
    }

    /// Origins allowed by CORS, in configuration order
    pub fn cors_origins(&self) -> Vec<String> {
        self.cms_url
            .iter()
            .chain(self.public_site_url.iter())
            .cloned()
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional(env: &dyn EnvironmentProvider, name: &str) -> Option<String> {
    env.get_var(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(env: &dyn EnvironmentProvider, name: &str, default: T) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match optional(env, name) {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| SettingsError::invalid(name, format!("'{}': {}", raw, e))),
        None => Ok(default),
    }
}

fn secret(env: &dyn EnvironmentProvider, name: &str) -> Result<String, SettingsError> {
    let value = optional(env, name).ok_or_else(|| SettingsError::missing(name))?;
    if value.len() < MIN_SECRET_LENGTH {
        return Err(SettingsError::TooShort {
            name: name.to_string(),
            min: MIN_SECRET_LENGTH,
            actual: value.len(),
        });
    }
    Ok(value)
}

fn normalize_origin(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
