//! Startup configuration for the bridge.
//!
//! Settings are read once at startup, validated, and injected into the
//! service; a missing backend secret fails the boot with a typed error
//! instead of surfacing per-request.

use std::time::Duration;

use config::{Config, Environment, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{SETTINGS_FILE, env, prod};
use phone_auth_core::DEFAULT_RESERVED_DOMAIN;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Missing required setting `{0}`")]
    Missing(&'static str),
    #[error("Failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Validated settings for one service process.
#[derive(Debug, Clone)]
pub struct BridgeSettings {
    pub app_address: String,
    pub backend: BackendSettings,
    pub internal_email: InternalEmailSettings,
}

#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Root URL shared by the backend's data and auth APIs.
    pub url: String,
    /// Privileged key for the verification RPC and admin updates.
    pub service_key: Secret<String>,
    /// Public key for the token and identity endpoints.
    pub anon_key: Secret<String>,
    /// Applied to the shared outbound HTTP client.
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct InternalEmailSettings {
    pub domain: String,
}

impl BridgeSettings {
    /// Load settings from the optional settings file plus `PHONE_AUTH__…`
    /// environment variables, environment winning.
    pub fn load() -> Result<Self, SettingsError> {
        let raw: RawSettings = Config::builder()
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_PREFIX)
                    .prefix_separator(env::SETTINGS_SEPARATOR)
                    .separator(env::SETTINGS_SEPARATOR),
            )
            .build()?
            .try_deserialize()?;

        raw.validate()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    app_address: Option<String>,
    #[serde(default)]
    backend: RawBackendSettings,
    #[serde(default)]
    internal_email: RawInternalEmailSettings,
}

#[derive(Debug, Default, Deserialize)]
struct RawBackendSettings {
    url: Option<String>,
    service_key: Option<Secret<String>>,
    anon_key: Option<Secret<String>>,
    timeout_in_millis: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawInternalEmailSettings {
    domain: Option<String>,
}

impl RawSettings {
    fn validate(self) -> Result<BridgeSettings, SettingsError> {
        let url = self
            .backend
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::Missing("backend.url"))?;

        let service_key = self
            .backend
            .service_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(SettingsError::Missing("backend.service_key"))?;

        let anon_key = self
            .backend
            .anon_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(SettingsError::Missing("backend.anon_key"))?;

        let timeout = self
            .backend
            .timeout_in_millis
            .map(Duration::from_millis)
            .unwrap_or(prod::backend::TIMEOUT);

        let domain = match self.internal_email.domain {
            Some(domain) if domain.trim().is_empty() => {
                return Err(SettingsError::Missing("internal_email.domain"));
            }
            Some(domain) => domain,
            None => DEFAULT_RESERVED_DOMAIN.to_string(),
        };

        Ok(BridgeSettings {
            app_address: self
                .app_address
                .unwrap_or_else(|| prod::APP_ADDRESS.to_string()),
            backend: BackendSettings {
                url,
                service_key,
                anon_key,
                timeout,
            },
            internal_email: InternalEmailSettings { domain },
        })
    }
}
