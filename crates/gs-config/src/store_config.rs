use crate::{ConfigError, ConfigErrorResult, DEFAULT_CREDENTIALS_PATH};

use std::path::Path;

use serde::Deserialize;

/// Environment variable that may carry the service-account JSON inline,
/// taking precedence over the credentials file.
pub const CREDENTIALS_ENV_VAR: &str = "GS_STORE_CREDENTIALS";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Service-account JSON file, relative to the config directory.
    pub credentials_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            credentials_path: String::from(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

/// Parsed service-account credentials. Only the fields the store client
/// reads; the raw JSON may carry more.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreCredentials {
    pub project_id: String,
    #[serde(default)]
    pub client_email: Option<String>,
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.credentials_path.is_empty() {
            return Err(ConfigError::store("store.credentials_path cannot be empty"));
        }

        // Keep the credentials file inside the config directory
        let path = Path::new(&self.credentials_path);
        if path.is_absolute() || self.credentials_path.contains("..") {
            return Err(ConfigError::store(
                "store.credentials_path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Resolve store credentials, checked once at startup.
    ///
    /// Precedence: inline JSON from `GS_STORE_CREDENTIALS`, then the
    /// credentials file under the config directory. Fails when neither is
    /// present - there is no lazy fallback later in the process lifetime.
    pub fn resolve_credentials(&self, config_dir: &Path) -> ConfigErrorResult<StoreCredentials> {
        if let Ok(raw) = std::env::var(CREDENTIALS_ENV_VAR) {
            return Self::parse_credentials(&raw, CREDENTIALS_ENV_VAR);
        }

        let path = config_dir.join(&self.credentials_path);
        if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            return Self::parse_credentials(&raw, &path.display().to_string());
        }

        Err(ConfigError::store(format!(
            "no store credentials: set {} or provide {}",
            CREDENTIALS_ENV_VAR,
            path.display()
        )))
    }

    fn parse_credentials(raw: &str, source: &str) -> ConfigErrorResult<StoreCredentials> {
        let credentials: StoreCredentials = serde_json::from_str(raw).map_err(|e| {
            ConfigError::store(format!("invalid credentials JSON from {}: {}", source, e))
        })?;

        if credentials.project_id.is_empty() {
            return Err(ConfigError::store(format!(
                "credentials from {} are missing project_id",
                source
            )));
        }

        Ok(credentials)
    }
}
