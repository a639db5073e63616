//! Service configuration.
//!
//! Values come from the process environment. Anything missing falls back to
//! the defaults below, except the provider credential, which is mandatory:
//! the service refuses to start without it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "INSURANCE_AGENT_MODEL";
/// Environment variable overriding the sampling temperature.
pub const TEMPERATURE_ENV: &str = "INSURANCE_AGENT_TEMPERATURE";
/// Environment variable overriding the completion timeout, in seconds.
pub const TIMEOUT_ENV: &str = "INSURANCE_AGENT_TIMEOUT_SECS";
/// Environment variable overriding the Gemini API base URL.
pub const BASE_URL_ENV: &str = "INSURANCE_AGENT_GEMINI_URL";
/// Environment variable for the bind address.
pub const HOST_ENV: &str = "INSURANCE_AGENT_HOST";
/// Environment variable for the listening port.
pub const PORT_ENV: &str = "PORT";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;
/// Upper bound accepted for the completion timeout.
const MAX_TIMEOUT_SECS: u64 = 120;

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or blank.
    #[error("{0} is required but not set")]
    Missing(&'static str),
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        /// Variable or field name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// Convenience result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Completion provider settings.
    pub llm: LlmConfig,
}

/// HTTP listener settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Listening port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Completion provider settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider credential.
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Whole-call timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// API base URL.
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.0,
            timeout_secs: 30,
            connect_timeout_secs: 5,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

impl LlmConfig {
    /// Whole-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if the credential is missing or a value is malformed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns an error if the credential is missing or a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.llm.api_key = get(API_KEY_ENV).ok_or(ConfigError::Missing(API_KEY_ENV))?;
        if let Some(model) = get(MODEL_ENV) {
            config.llm.model = model;
        }
        if let Some(raw) = get(TEMPERATURE_ENV) {
            config.llm.temperature = parse_var(TEMPERATURE_ENV, &raw)?;
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            config.llm.timeout_secs = parse_var(TIMEOUT_ENV, &raw)?;
        }
        if let Some(base_url) = get(BASE_URL_ENV) {
            config.llm.base_url = base_url;
        }
        if let Some(host) = get(HOST_ENV) {
            config.server.host = host;
        }
        if let Some(raw) = get(PORT_ENV) {
            config.server.port = parse_var(PORT_ENV, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any value is out of range or invalid.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::Missing(API_KEY_ENV));
        }

        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "llm.model",
                reason: "must not be empty".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::Invalid {
                name: "llm.temperature",
                reason: "must be within 0.0..=2.0".to_string(),
            });
        }

        if self.llm.timeout_secs == 0 || self.llm.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Invalid {
                name: "llm.timeout_secs",
                reason: format!("must be within 1..={MAX_TIMEOUT_SECS}"),
            });
        }

        if self.llm.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "llm.connect_timeout_secs",
                reason: "must be > 0".to_string(),
            });
        }

        Url::parse(&self.llm.base_url).map_err(|err| ConfigError::Invalid {
            name: "llm.base_url",
            reason: err.to_string(),
        })?;

        Ok(())
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        name,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(result.err(), Some(ConfigError::Missing(API_KEY_ENV)));

        let result = AppConfig::from_lookup(lookup(&[(API_KEY_ENV, "   ")]));
        assert_eq!(result.err(), Some(ConfigError::Missing(API_KEY_ENV)));
    }

    #[test]
    fn test_defaults_apply() {
        let config = AppConfig::from_lookup(lookup(&[(API_KEY_ENV, "key")]))
            .unwrap_or_default();
        assert_eq!(config.llm.api_key, "key");
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.llm.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_apply() {
        let config = AppConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "key"),
            (MODEL_ENV, "gemini-2.5-pro"),
            (TIMEOUT_ENV, "45"),
            (PORT_ENV, "9000"),
            (HOST_ENV, "127.0.0.1"),
        ]))
        .unwrap_or_default();
        assert_eq!(config.llm.model, "gemini-2.5-pro");
        assert_eq!(config.llm.timeout_secs, 45);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_rejects_malformed_values() {
        let bad_port = AppConfig::from_lookup(lookup(&[(API_KEY_ENV, "key"), (PORT_ENV, "http")]));
        assert!(matches!(
            bad_port,
            Err(ConfigError::Invalid { name: PORT_ENV, .. })
        ));

        let bad_timeout =
            AppConfig::from_lookup(lookup(&[(API_KEY_ENV, "key"), (TIMEOUT_ENV, "600")]));
        assert!(matches!(
            bad_timeout,
            Err(ConfigError::Invalid {
                name: "llm.timeout_secs",
                ..
            })
        ));

        let bad_url =
            AppConfig::from_lookup(lookup(&[(API_KEY_ENV, "key"), (BASE_URL_ENV, "not a url")]));
        assert!(matches!(
            bad_url,
            Err(ConfigError::Invalid {
                name: "llm.base_url",
                ..
            })
        ));
    }
}
