//! The submission sink seam and its HTTP implementation.

use crate::config::DeliveryConfig;
use crate::error::DeliveryError;
use crate::payload::RsvpPayload;
use async_trait::async_trait;

/// Anything that can carry one payload to the outside world.
///
/// Delivery is fire-and-forget: implementations report whether the
/// request was dispatched, never what the remote side did with it.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Dispatch one payload. Each call is an independent delivery;
    /// calling twice produces two deliveries.
    async fn deliver(&self, payload: &RsvpPayload) -> Result<(), DeliveryError>;
}

/// POSTs the payload as JSON with a `text/plain` content type.
///
/// The plain content type keeps the request "simple" in CORS terms so
/// the browser-equivalent flow never triggers a preflight; the endpoint
/// parses the body as JSON regardless. The response status and body are
/// ignored on purpose — the endpoint is an opaque sink.
#[derive(Debug)]
pub struct HttpSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSink {
    /// Sink pointed at a fixed destination.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpSink {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Sink from configuration; fails when no destination is set.
    pub fn from_config(config: &DeliveryConfig) -> Result<Self, DeliveryError> {
        match &config.endpoint {
            Some(url) => Ok(HttpSink::new(url.clone())),
            None => Err(DeliveryError::NotConfigured),
        }
    }

    /// Where this sink posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionSink for HttpSink {
    async fn deliver(&self, payload: &RsvpPayload) -> Result<(), DeliveryError> {
        let body = serde_json::to_string(payload)?;
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "dispatching rsvp");
        self.client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        // Response intentionally dropped: dispatched == delivered.
        Ok(())
    }
}
