mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod registry_config;
mod server_config;
pub mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use registry_config::RegistryConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "KTP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".ktp";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 256;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 10000;

const DEFAULT_DATABASE_FILENAME: &str = "registry.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_PROTECT_LAST_ADMIN: bool = true;
