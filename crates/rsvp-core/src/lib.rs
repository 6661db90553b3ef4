//! Pure logic for the wedding RSVP wizard.
//!
//! Everything in this crate is synchronous and side-effect free:
//! - The form state record and its vocabulary types
//! - A pure reducer: `(state, action) -> state`
//! - The step state machine (forward/backward targets, skip rule)
//! - Per-step validation producing a keyed error map
//! - Derived-list maintenance for companion/child entries
//! - The review summary the confirm step renders
//!
//! Delivery (payload projection, HTTP) lives in `rsvp-delivery`; the
//! stateful facade that ties both together lives in `rsvp-wizard`.

pub mod action;
pub mod error;
pub mod resize;
pub mod step_machine;
pub mod summary;
pub mod types;
pub mod validate;

pub use action::{apply, Action};
pub use error::{ErrorKey, ErrorMap};
pub use summary::Summary;
pub use types::{
    Child, Companion, Day, DaySet, MenuChoice, RsvpState, Step, SubmissionStatus,
    NOT_ATTENDING_LABEL,
};
pub use validate::validate;
