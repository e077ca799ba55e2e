use tracing::{info, warn};

use super::PushConfig;
use super::outcome::{DeliveryOutcome, DeliveryResult};
use super::transport::{HttpTransport, WebhookTransport};
use crate::display::{Planner, project};
use crate::recipe::Recipe;

/// Projects, compresses and sends a recipe over a [`WebhookTransport`]
#[derive(Debug, Clone)]
pub struct Coordinator<T> {
    transport: T,
    planner: Planner,
}

impl<T: WebhookTransport> Coordinator<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            planner: Planner::default(),
        }
    }

    pub fn with_planner(mut self, planner: Planner) -> Self {
        self.planner = planner;
        self
    }

    /// Push `recipe` to the configured webhook, at most one attempt.
    pub async fn push(&self, recipe: &Recipe, config: &PushConfig) -> DeliveryResult {
        let outcome = self.deliver(recipe, config).await;
        match &outcome {
            DeliveryOutcome::Delivered => info!("recipe pushed to TRMNL"),
            DeliveryOutcome::NotConfigured => {}
            other => warn!(outcome = ?other, "TRMNL push did not go through"),
        }
        DeliveryResult::from(outcome)
    }

    async fn deliver(&self, recipe: &Recipe, config: &PushConfig) -> DeliveryOutcome {
        let Some(url) = config.destination() else {
            return DeliveryOutcome::NotConfigured;
        };

        let report = self.planner.plan(project(recipe));
        if !report.fits {
            warn!(
                bytes = report.measurement.bytes,
                budget = self.planner.budget(),
                "payload still over budget after all compression stages"
            );
        }

        match self
            .transport
            .post_json(url, report.measurement.serialized)
            .await
        {
            Ok(status) => DeliveryOutcome::from_status(status),
            Err(e) => DeliveryOutcome::NetworkError { message: e.message },
        }
    }
}

/// Push `recipe` using a fresh HTTP client built from `config`.
///
/// Never fails: every problem is reported as a warning on the result.
pub async fn push(recipe: &Recipe, config: &PushConfig) -> DeliveryResult {
    if config.destination().is_none() {
        return DeliveryResult::from(DeliveryOutcome::NotConfigured);
    }

    match HttpTransport::new(config.timeout) {
        Ok(transport) => Coordinator::new(transport).push(recipe, config).await,
        Err(e) => DeliveryResult::from(DeliveryOutcome::NetworkError { message: e.message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::recipe::{Section, SectionName, Step};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every request and answers with a canned reply
    struct FakeTransport {
        reply: Result<u16, String>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn status(status: u16) -> Self {
            Self {
                reply: Ok(status),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_body(&self) -> String {
            self.calls.lock().unwrap().last().unwrap().1.clone()
        }
    }

    #[async_trait]
    impl WebhookTransport for FakeTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError> {
            self.calls.lock().unwrap().push((url.to_string(), body));
            self.reply.clone().map_err(TransportError::new)
        }
    }

    const URL: &str = "https://usetrmnl.com/api/custom_plugins/abc";

    fn configured() -> PushConfig {
        PushConfig::new(Some(URL.to_string()))
    }

    fn recipe(steps: usize, text: &str) -> Recipe {
        Recipe {
            title: "Shakshuka".to_string(),
            sections: vec![Section {
                name: SectionName::Cook,
                steps: (1..=steps)
                    .map(|i| Step::new(format!("step-{}", i), format!("{} {}", i, text)))
                    .collect(),
            }],
            ingredients: vec![],
        }
    }

    #[tokio::test]
    async fn test_not_configured_makes_no_call() {
        let coordinator = Coordinator::new(FakeTransport::status(200));
        let result = coordinator
            .push(&recipe(3, "stir"), &PushConfig::default())
            .await;

        assert!(result.success);
        assert_eq!(result.pushed, None);
        assert_eq!(result.outcome, DeliveryOutcome::NotConfigured);
        assert!(result.warnings.unwrap()[0].contains("not configured"));
        assert_eq!(coordinator.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let coordinator = Coordinator::new(FakeTransport::status(429));
        let result = coordinator.push(&recipe(3, "stir"), &configured()).await;

        assert!(result.success);
        assert_eq!(result.pushed, None);
        assert!(result.warnings.unwrap()[0].contains("rate limit reached"));
        assert_eq!(coordinator.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_http_error() {
        let coordinator = Coordinator::new(FakeTransport::status(500));
        let result = coordinator.push(&recipe(3, "stir"), &configured()).await;

        assert!(result.success);
        assert_eq!(result.outcome, DeliveryOutcome::HttpError { status: 500 });
        assert_eq!(
            result.warnings.unwrap(),
            vec!["TRMNL push failed (HTTP 500). Recipe parsed successfully.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_network_error() {
        let coordinator = Coordinator::new(FakeTransport::failing("connection refused"));
        let result = coordinator.push(&recipe(3, "stir"), &configured()).await;

        assert!(result.success);
        assert_eq!(result.pushed, None);
        assert_eq!(
            result.warnings.unwrap(),
            vec!["TRMNL push failed (connection refused). Recipe parsed successfully.".to_string()]
        );
        assert_eq!(coordinator.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_delivered() {
        let coordinator = Coordinator::new(FakeTransport::status(200));
        let result = coordinator.push(&recipe(3, "stir"), &configured()).await;

        assert!(result.success);
        assert_eq!(result.pushed, Some(true));
        assert_eq!(result.warnings, None);

        let calls = coordinator.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, URL);
        assert!(calls[0].1.starts_with(r#"{"merge_variables":{"recipe_title":"Shakshuka""#));
    }

    #[tokio::test]
    async fn test_sends_compressed_body() {
        let coordinator = Coordinator::new(FakeTransport::status(200));
        let big = recipe(40, &"simmer the tomatoes gently ".repeat(4));
        coordinator.push(&big, &configured()).await;

        let body = coordinator.transport.last_body();
        assert!(body.len() <= crate::display::BYTE_BUDGET);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["merge_variables"]["truncated"], true);
        assert_eq!(value["merge_variables"]["step_count"], 8);
    }

    #[tokio::test]
    async fn test_custom_planner_is_used() {
        use crate::display::{Planner, Stage};

        let planner = Planner::new(100, vec![Stage::CapSteps { max_steps: 2 }]);
        let coordinator = Coordinator::new(FakeTransport::status(200)).with_planner(planner);
        let result = coordinator.push(&recipe(5, "stir"), &configured()).await;
        assert_eq!(result.pushed, Some(true));

        let value: serde_json::Value =
            serde_json::from_str(&coordinator.transport.last_body()).unwrap();
        assert_eq!(value["merge_variables"]["step_count"], 2);
        assert_eq!(value["merge_variables"]["truncated"], true);
    }

    #[tokio::test]
    async fn test_push_without_url_skips_client() {
        let result = push(&recipe(1, "stir"), &PushConfig::new(Some(String::new()))).await;
        assert_eq!(result.outcome, DeliveryOutcome::NotConfigured);
    }
}
