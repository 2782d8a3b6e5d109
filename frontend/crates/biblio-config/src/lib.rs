mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use session_config::SessionConfig;

pub const CONFIG_DIR_ENV: &str = "BIBLIO_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".biblio";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_REFRESH_PROFILE_ON_LOGIN: bool = true;

const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;
const MIN_NOTIFICATION_DURATION_MS: u64 = 500;
const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;
const DEFAULT_DISMISS_LABEL: &str = "Close";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
