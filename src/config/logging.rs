use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::EnvironmentProvider;

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Self {
        let log_level = env
            .get_var("LOG_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "INFO".to_string());

        let app_log_file = env
            .get_var("APP_LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            app_log_file,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Install the global tracing subscriber
///
/// Console output always; a daily-rotated file when `APP_LOG_FILE` is set.
pub fn init_logging(env: &dyn EnvironmentProvider) -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env_provider(env);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    match &config.app_log_file {
        Some(log_file_path) => {
            let directory = log_file_path.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(directory)?;

            let file_name = log_file_path
                .file_name()
                .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(directory, file_name))
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter);

            subscriber
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))
        }
        None => subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticEnvironment;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::from_env_provider(&StaticEnvironment::empty());
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_logging_config_from_vars() {
        let env = StaticEnvironment::empty()
            .with_var("LOG_LEVEL", "debug,sea_orm=warn")
            .with_var("APP_LOG_FILE", "logs/trailhub.log");

        let config = LoggingConfig::from_env_provider(&env);
        assert_eq!(config.log_level, "debug,sea_orm=warn");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/trailhub.log")));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let env = StaticEnvironment::empty().with_var("LOG_LEVEL", "trailhub=verbose");
        assert!(matches!(init_logging(&env), Err(LoggingError::InvalidLogLevel(_))));
    }
}
