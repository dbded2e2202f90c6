//! API credential configuration.
//!
//! Loaded from environment variables into an explicit struct that is handed to
//! the token issuer and fetcher. The secret is redacted in `Debug` output.
use std::collections::HashMap;
use std::env;
use std::fmt;

use secrecy::SecretString;

/// Default metrics API host.
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us";

pub const ENV_API_KEY: &str = "ZOOM_API_KEY";
pub const ENV_API_SECRET: &str = "ZOOM_API_SECRET";
pub const ENV_BASE_URL: &str = "ZOOM_API_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[derive(Clone)]
pub struct Config {
    /// JWT issuer (`iss` claim).
    pub api_key: String,
    /// HS256 signing secret.
    pub api_secret: SecretString,
    /// Scheme and host the request paths are appended to.
    pub base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let api_key = required(vars, ENV_API_KEY)?;
        let api_secret = required(vars, ENV_API_SECRET)?;
        let base_url = vars
            .get(ENV_BASE_URL)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, api_secret).with_base_url(base_url))
    }
}

fn required(vars: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
    vars.get(name)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_required_and_defaults_base_url() {
        let c = Config::from_vars(&vars(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "sec"),
        ]))
        .unwrap();
        assert_eq!(c.api_key, "key");
        assert_eq!(c.api_secret.expose_secret(), "sec");
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let c = Config::from_vars(&vars(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "sec"),
            (ENV_BASE_URL, "http://127.0.0.1:9000/"),
        ]))
        .unwrap();
        assert_eq!(c.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn missing_or_empty_secret_is_an_error() {
        let err = Config::from_vars(&vars(&[(ENV_API_KEY, "key")])).unwrap_err();
        assert!(err.to_string().contains(ENV_API_SECRET));
        let err = Config::from_vars(&vars(&[(ENV_API_KEY, "key"), (ENV_API_SECRET, "")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == ENV_API_SECRET));
    }

    #[test]
    fn debug_redacts_secret() {
        let c = Config::new("key", "super-secret-value");
        let s = format!("{c:?}");
        assert!(s.contains("[REDACTED]"));
        assert!(!s.contains("super-secret-value"));
    }
}
