//! Signer configuration: the platform credentials and output/transport choices.

use crate::error::ConfigError;
use std::{env, fmt, str::FromStr};

/// Formatting of the returned auth header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// `SHA256Credential=..,Timestamp=..,Signature=..`
    #[default]
    Compact,
    /// `SHA256 Credential=.., Timestamp=.., Signature=..`
    Spaced,
}

impl FromStr for HeaderStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(HeaderStyle::Compact),
            "spaced" => Ok(HeaderStyle::Spaced),
            _ => Err("expected 'compact' or 'spaced'"),
        }
    }
}

/// HTTP binding of the signature route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// `GET` with `timestamp` and `payloadString` query parameters
    #[default]
    Query,
    /// `POST` with a JSON body
    Json,
}

impl FromStr for Transport {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "query" | "get" => Ok(Transport::Query),
            "json" | "post" => Ok(Transport::Json),
            _ => Err("expected 'query' or 'json'"),
        }
    }
}

/// Process-wide signer configuration, built once at start-up
#[derive(Clone)]
pub struct SignerConfig {
    pub app_id: String,
    pub secret_key: String,
    pub header_style: HeaderStyle,
    pub transport: Transport,
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("app_id", &self.app_id)
            .field("secret_key", &"<redacted>")
            .field("header_style", &self.header_style)
            .field("transport", &self.transport)
            .finish()
    }
}

impl SignerConfig {
    pub fn new(app_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret_key: secret_key.into(),
            header_style: HeaderStyle::default(),
            transport: Transport::default(),
        }
    }

    pub fn with_header_style(mut self, header_style: HeaderStyle) -> Self {
        self.header_style = header_style;
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Load configuration from environment variables
    ///
    /// `SHOPEE_APP_ID` and `SHOPEE_SECRET_KEY` are required. There are no
    /// built-in credentials to fall back to.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let app_id = required("SHOPEE_APP_ID")?;
        let secret_key = required("SHOPEE_SECRET_KEY")?;
        let header_style = parse_optional(&lookup, "SHOPEE_AUTH_HEADER_STYLE")?;
        let transport = parse_optional(&lookup, "SIGNER_TRANSPORT")?;

        Ok(Self {
            app_id,
            secret_key,
            header_style,
            transport,
        })
    }
}

fn parse_optional<F, T>(lookup: &F, key: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = &'static str> + Default,
{
    match lookup(key) {
        None => Ok(T::default()),
        Some(value) if value.trim().is_empty() => Ok(T::default()),
        Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
            key,
            value,
            reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_signer_config_defaults() {
        let config = SignerConfig::from_lookup(lookup_from(&[
            ("SHOPEE_APP_ID", "16345040007"),
            ("SHOPEE_SECRET_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.app_id, "16345040007");
        assert_eq!(config.secret_key, "secret");
        assert_eq!(config.header_style, HeaderStyle::Compact);
        assert_eq!(config.transport, Transport::Query);
    }

    #[test]
    fn test_signer_config_overrides() {
        let config = SignerConfig::from_lookup(lookup_from(&[
            ("SHOPEE_APP_ID", "1"),
            ("SHOPEE_SECRET_KEY", "s"),
            ("SHOPEE_AUTH_HEADER_STYLE", "Spaced"),
            ("SIGNER_TRANSPORT", "post"),
        ]))
        .unwrap();

        assert_eq!(config.header_style, HeaderStyle::Spaced);
        assert_eq!(config.transport, Transport::Json);
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let err = SignerConfig::from_lookup(lookup_from(&[("SHOPEE_APP_ID", "1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SHOPEE_SECRET_KEY")));

        let err = SignerConfig::from_lookup(lookup_from(&[
            ("SHOPEE_APP_ID", ""),
            ("SHOPEE_SECRET_KEY", "s"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SHOPEE_APP_ID")));
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        let err = SignerConfig::from_lookup(lookup_from(&[
            ("SHOPEE_APP_ID", "1"),
            ("SHOPEE_SECRET_KEY", "s"),
            ("SIGNER_TRANSPORT", "grpc"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "SIGNER_TRANSPORT",
                ..
            }
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = SignerConfig::new("1", "TOP-SECRET");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("TOP-SECRET"));
        assert!(rendered.contains("<redacted>"));
    }
}
