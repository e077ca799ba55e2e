use std::path::PathBuf;

use thiserror::Error;

use crate::recipe::SectionName;

/// Recipe rejected before any display work starts
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Invalid recipe structure: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid recipe: title is empty")]
    EmptyTitle,

    #[error("Invalid recipe: a step in section {section} has no id")]
    EmptyStepId { section: SectionName },

    #[error("Invalid recipe: duplicate step id '{0}'")]
    DuplicateStepId(String),
}

/// The single webhook POST never reached a response
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let head = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("cannot connect: {}", err)
        } else {
            err.to_string()
        };
        Self {
            message: with_causes(head, &err),
        }
    }
}

/// Append each `source()` below `err` to `head`, skipping causes whose text is
/// already in the message
pub(crate) fn with_causes(head: String, err: &dyn std::error::Error) -> String {
    let mut message = head;
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file {path} is not valid JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid webhook URL: {reason}\nGot: {url}\nExample: https://usetrmnl.com/api/custom_plugins/<uuid>")]
    InvalidWebhookUrl { url: String, reason: &'static str },
}
