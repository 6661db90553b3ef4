//! Delivery error taxonomy.
//!
//! Four causes, two user-visible messages: the missing-destination case
//! gets its own "contact us" banner, while automation rejections and
//! every flavor of transport fault collapse into one generic retry
//! message. Collapsing the automation case is deliberate — the caller
//! must not be able to tell it apart from a network fault.

use thiserror::Error;

/// Banner shown when the destination URL was never configured.
pub const MSG_NOT_CONFIGURED: &str =
    "No hemos podido registrar tu respuesta. Escríbenos y lo apuntamos a mano.";
/// Banner shown for every other delivery failure.
pub const MSG_SUBMIT_FAILED: &str = "Error de conexión. Inténtalo de nuevo.";

/// Why a submission did not get dispatched.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// No destination URL was configured at deploy time. Not retriable
    /// from the form; no network call was attempted.
    #[error("no submission endpoint configured")]
    NotConfigured,

    /// The hidden anti-automation field was filled in. Surfaced to the
    /// user exactly like a transport fault.
    #[error("submission rejected")]
    AutomationRejected,

    /// The request never left cleanly (DNS, refused connection,
    /// timeout). All network faults collapse here undistinguished.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The payload could not be serialized.
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Transport(err.to_string())
    }
}

impl DeliveryError {
    /// The banner text the form shows for this failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            DeliveryError::NotConfigured => MSG_NOT_CONFIGURED,
            DeliveryError::AutomationRejected
            | DeliveryError::Transport(_)
            | DeliveryError::Serialize(_) => MSG_SUBMIT_FAILED,
        }
    }
}
