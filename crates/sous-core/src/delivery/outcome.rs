use serde::Serialize;

/// What happened to a push attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// No webhook URL, nothing sent
    NotConfigured,
    /// TRMNL answered 429
    RateLimited,
    /// Any other non-2xx answer
    HttpError { status: u16 },
    /// The request never got a response
    NetworkError { message: String },
    Delivered,
}

impl DeliveryOutcome {
    /// Classify an HTTP status from the webhook
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => DeliveryOutcome::RateLimited,
            200..=299 => DeliveryOutcome::Delivered,
            _ => DeliveryOutcome::HttpError { status },
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }

    /// User-facing warning, if any
    pub fn warning(&self) -> Option<String> {
        match self {
            DeliveryOutcome::NotConfigured => Some(
                "TRMNL webhook URL not configured. Recipe parsed successfully but not pushed to display."
                    .to_string(),
            ),
            DeliveryOutcome::RateLimited => Some(
                "TRMNL rate limit reached (12/hour). Display will update after hourly reset."
                    .to_string(),
            ),
            DeliveryOutcome::HttpError { status } => Some(format!(
                "TRMNL push failed (HTTP {}). Recipe parsed successfully.",
                status
            )),
            DeliveryOutcome::NetworkError { message } => Some(format!(
                "TRMNL push failed ({}). Recipe parsed successfully.",
                message
            )),
            DeliveryOutcome::Delivered => None,
        }
    }
}

/// Caller-facing result of a push.
///
/// `success` is always true: a display problem must never hide a recipe
/// that parsed fine. Problems show up in `warnings` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Tag behind the warnings, for callers that branch on it
    #[serde(skip)]
    pub outcome: DeliveryOutcome,
}

impl From<DeliveryOutcome> for DeliveryResult {
    fn from(outcome: DeliveryOutcome) -> Self {
        let pushed = outcome.is_delivered().then_some(true);
        let warnings = outcome.warning().map(|w| vec![w]);
        Self {
            success: true,
            pushed,
            warnings,
            outcome,
        }
    }
}
