//! Server configuration for the token endpoint.

use std::fmt;

use super::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration for the token issuance service.
///
/// Reads from environment variables once at startup:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `ZEGO_APP_ID` | (required) | Numeric application id |
/// | `ZEGO_SERVER_SECRET` | (required) | Server secret shared with ZEGO |
/// | `HOST` | `0.0.0.0` | Server bind address |
/// | `PORT` | `8080` | Server port |
///
/// # Example
///
/// ```rust,no_run
/// use zego_token::ServerConfig;
///
/// let config = ServerConfig::from_env().expect("ZEGO_APP_ID and ZEGO_SERVER_SECRET must be set");
/// println!("listening on {}", config.socket_addr());
/// ```
#[derive(Clone)]
pub struct ServerConfig {
    /// Server bind address (default: 0.0.0.0)
    pub host: String,
    /// Server port (default: 8080)
    pub port: u16,
    /// ZEGO application id
    pub app_id: u32,
    /// ZEGO server secret
    pub server_secret: String,
}

impl ServerConfig {
    /// Load the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_app_id = var("ZEGO_APP_ID").ok_or(ConfigError::Missing("ZEGO_APP_ID"))?;
        let app_id = match raw_app_id.trim().parse::<u32>() {
            Ok(id) if id != 0 => id,
            _ => return Err(ConfigError::InvalidAppId(raw_app_id)),
        };

        let server_secret =
            var("ZEGO_SERVER_SECRET").ok_or(ConfigError::Missing("ZEGO_SERVER_SECRET"))?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            app_id,
            server_secret,
        })
    }

    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("app_id", &self.app_id)
            .field("server_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ZEGO_APP_ID", "1234567"),
            ("ZEGO_SERVER_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.app_id, 1234567);
        assert_eq!(config.server_secret, "secret");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ZEGO_APP_ID", "42"),
            ("ZEGO_SERVER_SECRET", "secret"),
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_app_id() {
        let err = ServerConfig::from_lookup(lookup(&[("ZEGO_SERVER_SECRET", "secret")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ZEGO_APP_ID")));
    }

    #[test]
    fn test_missing_secret() {
        let err = ServerConfig::from_lookup(lookup(&[("ZEGO_APP_ID", "42")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ZEGO_SERVER_SECRET")));
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("ZEGO_APP_ID", "42"),
            ("ZEGO_SERVER_SECRET", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ZEGO_SERVER_SECRET")));
    }

    #[test]
    fn test_non_numeric_app_id() {
        for bad in ["abc", "-1", "0", "4294967296"] {
            let err = ServerConfig::from_lookup(lookup(&[
                ("ZEGO_APP_ID", bad),
                ("ZEGO_SERVER_SECRET", "secret"),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidAppId(_)), "{bad}");
        }
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("ZEGO_APP_ID", "42"),
            ("ZEGO_SERVER_SECRET", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            app_id: 42,
            server_secret: "super-secret-value".to_string(),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
