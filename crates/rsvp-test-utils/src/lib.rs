//! Testing utilities for the RSVP workspace
//!
//! Shared fixtures: pre-filled states and a recording stub sink.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use rsvp_core::{apply, Action, MenuChoice, RsvpState};
use rsvp_delivery::{DeliveryError, RsvpPayload, SubmissionSink};

/// A sink that records every payload and succeeds or fails on demand.
#[derive(Debug, Default)]
pub struct StubSink {
    fail: bool,
    deliveries: Mutex<Vec<RsvpPayload>>,
}

impl StubSink {
    pub fn ok() -> Self {
        StubSink::default()
    }

    pub fn failing() -> Self {
        StubSink {
            fail: true,
            deliveries: Mutex::new(Vec::new()),
        }
    }

    /// Payloads delivered so far, in order.
    pub fn deliveries(&self) -> Vec<RsvpPayload> {
        self.deliveries.lock().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().len()
    }
}

#[async_trait]
impl SubmissionSink for StubSink {
    async fn deliver(&self, payload: &RsvpPayload) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Transport("stub sink is offline".to_string()));
        }
        self.deliveries.lock().push(payload.clone());
        Ok(())
    }
}

/// State with a valid identity step filled in.
pub fn identified_state(name: &str, contact: &str) -> RsvpState {
    let state = RsvpState::default();
    let state = apply(&state, Action::SetFullName(name.to_string()));
    apply(&state, Action::SetContact(contact.to_string()))
}

/// A complete attending party: Juan plus one companion and one child,
/// wedding day only, meat for the main guest.
pub fn juan_and_family() -> RsvpState {
    let state = identified_state("Juan Perez", "juan@example.com");
    let state = apply(&state, Action::AdjustAdults(1));
    let state = apply(&state, Action::AdjustChildren(1));
    let state = apply(&state, Action::SetMainMenu(MenuChoice::Meat));
    let state = apply(
        &state,
        Action::SetCompanionName {
            index: 0,
            name: "Marta Ruiz".to_string(),
        },
    );
    apply(
        &state,
        Action::SetChildName {
            index: 0,
            name: "Vera".to_string(),
        },
    )
}

/// A guest who declines everything.
pub fn declined_state(name: &str, contact: &str) -> RsvpState {
    apply(&identified_state(name, contact), Action::ToggleNotAttending)
}
