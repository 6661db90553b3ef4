//! Submission side of the RSVP wizard.
//!
//! Projects the accumulated form state into the flat wire payload the
//! collection endpoint expects and delivers it once, fire-and-forget:
//! the endpoint's response is never inspected, so "delivered" means
//! "the request left this machine", nothing stronger.

pub mod config;
pub mod error;
pub mod payload;
pub mod sink;

pub use config::DeliveryConfig;
pub use error::{DeliveryError, MSG_NOT_CONFIGURED, MSG_SUBMIT_FAILED};
pub use payload::RsvpPayload;
pub use sink::{HttpSink, SubmissionSink};
