use florida_health::config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Logs go to an hourly rolling file; the terminal belongs to the dashboard.
pub fn setup_logger(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_appender = create_file_appender(config)?;
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(file_appender)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn create_file_appender(
    config: &LoggingConfig,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(&config.file_prefix)
        .build(&config.directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_log_directory_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = LoggingConfig {
            directory: file.path().join("logs"),
            ..LoggingConfig::default()
        };
        assert!(setup_logger(&config).is_err());
    }

    #[test]
    fn test_appender_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            directory: dir.path().join("nested").join("logs"),
            ..LoggingConfig::default()
        };
        assert!(create_file_appender(&config).is_ok());
        assert!(config.directory.is_dir());
    }
}
