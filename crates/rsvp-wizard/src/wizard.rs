//! The wizard itself.

use rsvp_core::{apply, Action, Day, MenuChoice, RsvpState, Step, SubmissionStatus};
use rsvp_delivery::{
    DeliveryConfig, DeliveryError, HttpSink, RsvpPayload, SubmissionSink, MSG_NOT_CONFIGURED,
};
use std::sync::Arc;

/// Host-view hook, called after every successful forward transition so
/// the host can scroll the card into view and move focus. Never called
/// for rejected transitions or backward navigation.
pub trait StepObserver: Send + Sync {
    /// A forward transition landed on `step`.
    fn step_entered(&self, step: Step);
}

struct NoopObserver;

impl StepObserver for NoopObserver {
    fn step_entered(&self, _step: Step) {}
}

/// One interactive RSVP session.
///
/// Single owner of its state for the wizard's lifetime: every mutation
/// goes through the pure reducer, and the only asynchronous work is the
/// one-at-a-time submission. `None` for the sink means no destination
/// was configured at deploy time — a handled state, not an error.
pub struct Wizard {
    state: RsvpState,
    sink: Option<Arc<dyn SubmissionSink>>,
    observer: Box<dyn StepObserver>,
}

impl Wizard {
    /// Wizard delivering through `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Wizard {
            state: RsvpState::default(),
            sink: Some(sink),
            observer: Box::new(NoopObserver),
        }
    }

    /// Wizard with no destination; submitting surfaces the
    /// configuration banner without attempting a call.
    #[must_use]
    pub fn unconfigured() -> Self {
        Wizard {
            state: RsvpState::default(),
            sink: None,
            observer: Box::new(NoopObserver),
        }
    }

    /// Wizard wired from the environment: an HTTP sink when
    /// `RSVP_ENDPOINT_URL` is set, otherwise unconfigured.
    #[must_use]
    pub fn from_env() -> Self {
        match HttpSink::from_config(&DeliveryConfig::from_env()) {
            Ok(sink) => Wizard::new(Arc::new(sink)),
            Err(_) => Wizard::unconfigured(),
        }
    }

    /// Attach a host-view observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn StepObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Resume from a previously captured state (the state is plain
    /// serde data, so hosts may stash and rehydrate it).
    #[must_use]
    pub fn with_state(mut self, state: RsvpState) -> Self {
        self.state = state;
        self
    }

    /// Current state, read-only.
    #[must_use]
    pub fn state(&self) -> &RsvpState {
        &self.state
    }

    /// Run one action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, step = ?self.state.step, "dispatch");
        self.state = apply(&self.state, action);
    }

    /// Validate the current step and advance. Fires the host-view hook
    /// only when the step actually changed.
    pub fn next(&mut self) {
        let before = self.state.step;
        self.dispatch(Action::Next);
        if self.state.step == before {
            if self.state.errors.is_empty() {
                // Valid but nowhere further to go: `next` on the last
                // step is a no-op, not a rejection.
                tracing::debug!(step = ?before, "already on the last step");
            } else {
                tracing::info!(step = ?before, errors = self.state.errors.len(), "step rejected");
            }
        } else {
            tracing::info!(from = ?before, to = ?self.state.step, "step advanced");
            self.observer.step_entered(self.state.step);
        }
    }

    /// Go back one step; no validation, no hook.
    pub fn prev(&mut self) {
        self.dispatch(Action::Prev);
    }

    /// Flip one celebration day.
    pub fn toggle_day(&mut self, day: Day) {
        self.dispatch(Action::ToggleDay(day));
    }

    /// Flip the decline flag.
    pub fn toggle_not_attending(&mut self) {
        self.dispatch(Action::ToggleNotAttending);
    }

    /// Pick the respondent's menu.
    pub fn set_main_menu(&mut self, menu: MenuChoice) {
        self.dispatch(Action::SetMainMenu(menu));
    }

    /// Submit the accumulated state once.
    ///
    /// Order matters: the configuration and anti-automation gates run
    /// before the status ever reaches `Submitting`, so neither leaves a
    /// half-started submission behind. A wizard already submitting or
    /// already succeeded ignores the call. Failure keeps the state
    /// intact; the user retries by calling submit again, and every
    /// retry is an independent delivery.
    pub async fn submit(&mut self) -> Result<(), DeliveryError> {
        match self.state.status {
            SubmissionStatus::Submitting | SubmissionStatus::Success => {
                tracing::debug!(status = ?self.state.status, "submit ignored");
                return Ok(());
            }
            SubmissionStatus::Idle | SubmissionStatus::Error => {}
        }

        let Some(sink) = self.sink.clone() else {
            tracing::warn!("no destination configured, dropping submission");
            self.dispatch(Action::SubmissionFailed(MSG_NOT_CONFIGURED.to_string()));
            return Err(DeliveryError::NotConfigured);
        };

        if !self.state.honeypot.is_empty() {
            // Surfaced exactly like a transport fault.
            let err = DeliveryError::AutomationRejected;
            tracing::warn!("hidden field filled, dropping submission");
            self.dispatch(Action::SubmissionFailed(err.user_message().to_string()));
            return Err(err);
        }

        self.dispatch(Action::SubmissionStarted);
        let payload = RsvpPayload::project(&self.state);
        match sink.deliver(&payload).await {
            Ok(()) => {
                tracing::info!(guests = payload.adultos + payload.ninos, "rsvp dispatched");
                self.dispatch(Action::SubmissionSucceeded);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "rsvp delivery failed");
                self.dispatch(Action::SubmissionFailed(err.user_message().to_string()));
                Err(err)
            }
        }
    }

    /// Discard everything and start a fresh session. The only way out
    /// of a `Success` state.
    pub fn reset(&mut self) {
        tracing::info!("wizard reset");
        self.state = RsvpState::default();
    }
}
