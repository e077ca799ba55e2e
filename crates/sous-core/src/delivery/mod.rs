//! Pushing recipes to a TRMNL display.
//!
//! A push never fails from the caller's point of view. Missing configuration,
//! rate limits, HTTP errors and network errors all come back as a successful
//! [`DeliveryResult`] carrying a warning, so a recipe that parsed fine is
//! always returned to the user.
//!
//! # Usage
//!
//! ```ignore
//! use sous_core::delivery::{PushConfig, push};
//!
//! let config = PushConfig::new(Some("https://usetrmnl.com/api/custom_plugins/...".into()));
//! let result = push(&recipe, &config).await;
//! if let Some(warnings) = &result.warnings {
//!     eprintln!("{}", warnings.join("\n"));
//! }
//! ```

mod coordinator;
mod outcome;
mod transport;

use std::time::Duration;

pub use coordinator::{Coordinator, push};
pub use outcome::{DeliveryOutcome, DeliveryResult};
pub use transport::{HttpTransport, WebhookTransport};

/// Where and how to push. Built by the caller; nothing here reads the
/// process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushConfig {
    /// TRMNL custom plugin webhook URL (None = display push disabled)
    pub webhook_url: Option<String>,
    /// Request timeout (None = no timeout of our own)
    pub timeout: Option<Duration>,
}

impl PushConfig {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            webhook_url,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The webhook URL, treating blank strings as unset
    pub fn destination(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
