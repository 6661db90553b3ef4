//! Delivery configuration.
//!
//! One external value: the destination URL, baked in at build/deploy
//! time. Its absence is a valid, handled state — the wizard surfaces a
//! configuration banner instead of attempting a call — so the loader
//! never fails.

/// Where confirmations get posted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Destination URL, if one was provided.
    pub endpoint: Option<String>,
}

impl DeliveryConfig {
    /// Read the destination from `RSVP_ENDPOINT_URL`. Blank counts as
    /// unset.
    #[must_use]
    pub fn from_env() -> Self {
        let endpoint = std::env::var("RSVP_ENDPOINT_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        DeliveryConfig { endpoint }
    }

    /// Config pointing at a known destination.
    #[must_use]
    pub fn with_endpoint(url: impl Into<String>) -> Self {
        DeliveryConfig {
            endpoint: Some(url.into()),
        }
    }

    /// Whether a destination is available at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}
