use anyhow::Result;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

/// Generic webhook notifier
/// Delivers plain-text messages to a Discord-compatible webhook URL
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct WebhookMessage {
    content: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Deliver a single message to the webhook. One attempt, no retries.
    pub async fn send(&self, content: &str) -> Result<()> {
        let message = WebhookMessage {
            content: content.to_string(),
        };

        info!("Delivering webhook notification");

        let response = self.client.post(&self.url).json(&message).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Webhook delivery failed {}: {}", status, body);
            anyhow::bail!("Webhook error {}: {}", status, body);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_notifier_creation() {
        let notifier = WebhookNotifier::new("https://example.org/hook".to_string());
        assert_eq!(notifier.url, "https://example.org/hook");
    }
}
