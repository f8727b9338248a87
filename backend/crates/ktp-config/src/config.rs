use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RegistryConfig, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `KTP_CONFIG_DIR` env var, else `./.ktp/`
    /// 2. Auto-create the config directory
    /// 3. Parse `config.toml` if it exists, else use defaults
    /// 4. Apply `KTP_*` environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: KTP_CONFIG_DIR env var > ./.ktp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.registry.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Full path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} concurrent requests)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.algorithm()
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  registry: initial_admin={}, import_policy={}, protect_last_admin={}",
            self.registry.initial_admin.as_deref().unwrap_or("<unset>"),
            self.registry.import_policy,
            self.registry.protect_last_admin
        );
        info!(
            "  validation: hash<={}, national_id<={}",
            self.validation.max_hash_length, self.validation.max_national_id_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KTP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KTP_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "KTP_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("KTP_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("KTP_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("KTP_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "KTP_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );

        // Logging
        Self::apply_env_parse("KTP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KTP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KTP_LOG_FILE", &mut self.logging.file);

        // Registry
        Self::apply_env_option_string(
            "KTP_REGISTRY_INITIAL_ADMIN",
            &mut self.registry.initial_admin,
        );
        Self::apply_env_parse(
            "KTP_REGISTRY_IMPORT_POLICY",
            &mut self.registry.import_policy,
        );
        Self::apply_env_bool(
            "KTP_REGISTRY_PROTECT_LAST_ADMIN",
            &mut self.registry.protect_last_admin,
        );

        // Validation
        Self::apply_env_parse(
            "KTP_VALIDATION_MAX_HASH_LENGTH",
            &mut self.validation.max_hash_length,
        );
        Self::apply_env_parse(
            "KTP_VALIDATION_MAX_NATIONAL_ID_LENGTH",
            &mut self.validation.max_national_id_length,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
