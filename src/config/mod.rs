mod database;
mod env_provider;
mod errors;
mod logging;
mod settings;

pub use database::{connect_database, run_migrations};
pub use env_provider::{EnvironmentProvider, StaticEnvironment, SystemEnvironment};
pub use errors::SettingsError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use settings::{AppSettings, Secrets};
