use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, StoreConfig,
    StoreCredentials,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for GS_CONFIG_DIR env var, else use ./.gs/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GS_CONFIG_DIR env var > ./.gs/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("GS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".gs"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Resolve the store credentials from the environment or the
    /// credentials file. This is the only place credentials are read.
    pub fn store_credentials(&self) -> ConfigErrorResult<StoreCredentials> {
        let config_dir = Self::config_dir()?;
        self.store.resolve_credentials(&config_dir)
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  store: credentials_path={}", self.store.credentials_path);
        info!(
            "  auth: token_ttl={}s, verify_timeout={}s",
            self.auth.token_ttl_secs, self.auth.verify_timeout_secs
        );
        info!(
            "  verifier: tokeninfo={}, userinfo={}",
            self.auth.tokeninfo_url, self.auth.userinfo_url
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GS_SERVER_PORT", &mut self.server.port);

        // Store
        Self::apply_env_string(
            "GS_STORE_CREDENTIALS_PATH",
            &mut self.store.credentials_path,
        );

        // Auth
        Self::apply_env_parse("GS_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_string("GS_AUTH_TOKENINFO_URL", &mut self.auth.tokeninfo_url);
        Self::apply_env_string("GS_AUTH_USERINFO_URL", &mut self.auth.userinfo_url);
        Self::apply_env_parse(
            "GS_AUTH_VERIFY_TIMEOUT_SECS",
            &mut self.auth.verify_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("GS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GS_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
