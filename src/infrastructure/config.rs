// src/infrastructure/config.rs
use crate::constants::DEFAULT_API_BASE;
use crate::domain::DomainError;
use clap::ValueEnum;
use reqwest::Url;
use std::fmt;

/// How the OpenKey is presented to the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>` header
    #[default]
    Bearer,
    /// `openkey` query parameter, plus an `openkey` field in JSON bodies
    Openkey,
}

/// Connection settings, resolved once at start-up and handed to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash
    pub api_base: String,
    pub api_key: String,
    pub auth: AuthScheme,
}

impl ClientConfig {
    /// Build the configuration from raw flag/env values.
    ///
    /// Both values are trimmed. A blank base falls back to the public API and
    /// loses any trailing slashes; a blank key is a fatal configuration error.
    pub fn resolve(
        api_base: Option<&str>,
        api_key: Option<&str>,
        auth: AuthScheme,
    ) -> Result<Self, DomainError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(DomainError::MissingApiKey)?
            .to_string();

        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&api_base).map_err(|e| DomainError::InvalidApiBase {
            url: api_base.clone(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(DomainError::InvalidApiBase {
                url: api_base,
                reason: "not a hierarchical URL".to_string(),
            });
        }

        Ok(Self {
            api_base,
            api_key,
            auth,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &"***")
            .field("auth", &self.auth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_base_when_resolving_then_uses_public_default() {
        // Act
        let config = ClientConfig::resolve(None, Some("key"), AuthScheme::Bearer).unwrap();

        // Assert
        assert_eq!(config.api_base, "https://api.rote.ink/v2/api");
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn given_blank_base_when_resolving_then_uses_public_default() {
        let config = ClientConfig::resolve(Some("   "), Some("key"), AuthScheme::Bearer).unwrap();

        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn given_padded_base_with_trailing_slashes_when_resolving_then_normalizes() {
        // Arrange
        let raw = "  https://notes.example.com/v2/api//  ";

        // Act
        let config = ClientConfig::resolve(Some(raw), Some(" key "), AuthScheme::Openkey).unwrap();

        // Assert
        assert_eq!(config.api_base, "https://notes.example.com/v2/api");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.auth, AuthScheme::Openkey);
    }

    #[test]
    fn given_missing_key_when_resolving_then_fails() {
        let result = ClientConfig::resolve(None, None, AuthScheme::Bearer);

        assert!(matches!(result, Err(DomainError::MissingApiKey)));
    }

    #[test]
    fn given_blank_key_when_resolving_then_fails() {
        let result = ClientConfig::resolve(None, Some(" \t "), AuthScheme::Bearer);

        assert!(matches!(result, Err(DomainError::MissingApiKey)));
    }

    #[test]
    fn given_unparseable_base_when_resolving_then_fails() {
        let result = ClientConfig::resolve(Some("not a url"), Some("key"), AuthScheme::Bearer);

        assert!(matches!(result, Err(DomainError::InvalidApiBase { .. })));
    }

    #[test]
    fn given_config_when_debug_formatting_then_key_is_redacted() {
        let config = ClientConfig::resolve(None, Some("s3cret"), AuthScheme::Bearer).unwrap();

        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("***"));
    }
}
