//! Persistent settings.
//!
//! Stored as JSON at `<config_dir>/sous/settings.json`. The webhook URL falls
//! back to the `TRMNL_WEBHOOK_URL` environment variable when not set here.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::delivery::PushConfig;
use crate::error::SettingsError;

/// Environment variable consulted when no webhook URL is saved
pub const WEBHOOK_URL_ENV_VAR: &str = "TRMNL_WEBHOOK_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// TRMNL custom plugin webhook URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Push request timeout in seconds (unset = no timeout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Default settings file location
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sous")
            .join("settings.json")
    }

    /// Load from the default location
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| SettingsError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            SettingsError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, content).map_err(write_err)
    }

    /// Validate and store a webhook URL
    pub fn set_webhook_url(&mut self, url: &str) -> Result<(), SettingsError> {
        self.webhook_url = Some(validate_webhook_url(url)?);
        Ok(())
    }

    /// Webhook URL from settings, falling back to `TRMNL_WEBHOOK_URL`
    pub fn webhook_url(&self) -> Option<String> {
        self.webhook_url_with_fallback(std::env::var(WEBHOOK_URL_ENV_VAR).ok())
    }

    fn webhook_url_with_fallback(&self, env_value: Option<String>) -> Option<String> {
        self.webhook_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| env_value.filter(|url| !url.trim().is_empty()))
    }

    /// Build the push configuration the delivery layer expects
    pub fn push_config(&self) -> PushConfig {
        let config = PushConfig::new(self.webhook_url());
        match self.timeout_secs.filter(|secs| *secs > 0) {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

/// Check a webhook URL has an http(s) scheme and a host, returning it trimmed
pub fn validate_webhook_url(url: &str) -> Result<String, SettingsError> {
    let trimmed = url.trim();
    let invalid = |reason| SettingsError::InvalidWebhookUrl {
        url: trimmed.to_string(),
        reason,
    };

    let after_scheme = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| invalid("must start with http:// or https://"))?;

    if after_scheme.is_empty() || after_scheme.starts_with('/') {
        return Err(invalid("missing host"));
    }

    Ok(trimmed.to_string())
}
