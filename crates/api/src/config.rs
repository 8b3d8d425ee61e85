use std::str::FromStr;

use lift_groq::config::{GroqConfig, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Explicit CORS allow-list from `CORS_ORIGINS`. `None` means every
    /// origin is allowed (the default).
    pub cors_origins: Option<Vec<String>>,
    /// HTTP request timeout in seconds (default: `120`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Completion provider settings.
    pub groq: GroqConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `8000`                           |
    /// | `CORS_ORIGINS`         | unset (all origins)              |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                            |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                       |
    /// | `GROQ_API_KEY`         | unset                            |
    /// | `GROQ_MODEL`           | `llama-3.3-70b-versatile`        |
    /// | `GROQ_API_URL`         | `https://api.groq.com/openai/v1` |
    /// | `GROQ_TIMEOUT_SECS`    | `60`                             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8000)?;
        let cors_origins = lookup("CORS_ORIGINS").and_then(|raw| parse_origins(&raw));
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 120)?;
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?;

        let groq = GroqConfig {
            api_key: lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()),
            model: lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            api_url: lookup("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
            timeout_secs: parse_or(&lookup, "GROQ_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            groq,
        })
    }
}

/// Parse a comma-separated origin list. Empty or `*` means "allow all".
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.cors_origins.is_none());
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.groq.api_key.is_none());
        assert!(!config.groq.has_credential());
        assert_eq!(config.groq.model, DEFAULT_MODEL);
        assert_eq!(config.groq.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn groq_settings_are_read() {
        let config = load(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("GROQ_TIMEOUT_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.groq.api_key.as_deref(), Some("gsk_test"));
        assert!(config.groq.has_credential());
        assert_eq!(config.groq.model, "llama-3.1-8b-instant");
        assert_eq!(config.groq.timeout_secs, 15);
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let config = load(&[("GROQ_API_KEY", "   ")]).unwrap();
        assert!(config.groq.api_key.is_none());
    }

    #[test]
    fn cors_origins_parse_into_allow_list() {
        let config = load(&[("CORS_ORIGINS", "http://a.test, http://b.test,")]).unwrap();
        assert_eq!(
            config.cors_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }

    #[test]
    fn wildcard_cors_origin_stays_permissive() {
        let config = load(&[("CORS_ORIGINS", "*")]).unwrap();
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "PORT", .. });
        assert!(err.to_string().contains("eighty"));
    }
}
