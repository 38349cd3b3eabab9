use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, DEFAULT_TOKENINFO_URL,
    DEFAULT_USERINFO_URL, DEFAULT_VERIFY_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token lifetime in seconds.
    pub token_ttl_secs: u64,
    /// Endpoint that checks an external token as an ID token.
    pub tokeninfo_url: String,
    /// Fallback endpoint that checks the token as an OAuth access token.
    pub userinfo_url: String,
    /// Network timeout for verifier calls, in seconds.
    pub verify_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            tokeninfo_url: String::from(DEFAULT_TOKENINFO_URL),
            userinfo_url: String::from(DEFAULT_USERINFO_URL),
            verify_timeout_secs: DEFAULT_VERIFY_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        if self.verify_timeout_secs == 0 {
            return Err(ConfigError::auth("auth.verify_timeout_secs must be > 0"));
        }

        for (name, url) in [
            ("auth.tokeninfo_url", &self.tokeninfo_url),
            ("auth.userinfo_url", &self.userinfo_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::auth(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }
}
