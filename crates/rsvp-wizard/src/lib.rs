//! The RSVP wizard facade
//!
//! Ties the pure core to the delivery side:
//! - Owns one [`rsvp_core::RsvpState`] for the session
//! - Feeds user interactions through the pure reducer
//! - Notifies the host view after successful forward transitions
//! - Runs the submit algorithm against an injected sink
//!
//! All side effects of the wizard live in this crate; everything below
//! it is pure or a network seam.

pub mod wizard;

pub use wizard::{StepObserver, Wizard};
