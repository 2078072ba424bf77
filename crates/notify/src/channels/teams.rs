//! Microsoft Teams incoming-webhook notification channel.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::card::TeamsMessage;
use crate::error::NotifyError;

/// Microsoft Teams incoming-webhook channel.
pub struct TeamsChannel {
    webhook_url: String,
    client: reqwest::Client,
}

impl TeamsChannel {
    /// Create a Teams channel posting to the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }

    /// Post a message to the webhook. Single attempt, no retries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or Teams answers with
    /// a non-success status.
    pub async fn send(&self, message: &TeamsMessage) -> Result<(), NotifyError> {
        let body = serde_json::to_string(message)?;

        debug!(channel = "teams", bytes = body.len(), "Sending notification");

        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if response.status().is_success() {
            debug!(channel = "teams", "Notification sent successfully");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            warn!(
                channel = "teams",
                status = %status,
                body = %body,
                "Teams webhook request failed"
            );

            Err(NotifyError::Other(format!(
                "Teams returned {status}: {body}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::review_card;
    use crate::events::{ReviewEvent, ReviewState};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_message() -> TeamsMessage {
        let event = ReviewEvent {
            repository: "acme/widgets".to_string(),
            pr_number: "42".to_string(),
            pr_title: "Add widget".to_string(),
            pr_url: "https://github.com/acme/widgets/pull/42".to_string(),
            reviewer: "alice".to_string(),
            action: "submitted".to_string(),
            state: ReviewState::Approved,
            global_comment: String::new(),
            comments_count: "0".to_string(),
            head_ref: "feature".to_string(),
            base_ref: "main".to_string(),
            bot_image_url: String::new(),
        };
        review_card(&event, "https://x/a.png")
    }

    #[tokio::test]
    async fn test_send_succeeds_on_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1"))
            .expect(1)
            .mount(&server)
            .await;

        let channel = TeamsChannel::new(format!("{}/webhook", server.uri()));
        channel.send(&sample_message()).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_fails_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Webhook disabled"))
            .mount(&server)
            .await;

        let channel = TeamsChannel::new(format!("{}/webhook", server.uri()));
        let err = channel.send(&sample_message()).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("500"), "unexpected error: {message}");
        assert!(message.contains("Webhook disabled"), "unexpected error: {message}");
    }

    #[tokio::test]
    async fn test_send_fails_on_transport_error() {
        let channel = TeamsChannel::new("http://127.0.0.1:1/webhook".to_string());
        let err = channel.send(&sample_message()).await.unwrap_err();

        assert!(matches!(err, NotifyError::Http(_)));
    }
}
