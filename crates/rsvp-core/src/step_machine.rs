//! Step transition table.
//!
//! Four sequential steps plus one branch: a declining guest has no
//! details to give, so Events jumps straight to Confirm and Confirm
//! jumps straight back to Events.

use crate::types::{RsvpState, Step};

/// Whether the details step is skipped in both directions.
#[must_use]
pub fn skips_details(state: &RsvpState) -> bool {
    state.not_attending
}

/// Where a validated `next` lands from the current step.
///
/// `Confirm` is the last form step; `next` from there is a no-op (the
/// confirm step's action is submit, not navigation).
#[must_use]
pub fn forward_target(state: &RsvpState) -> Step {
    match state.step {
        Step::Identity => Step::Events,
        Step::Events if skips_details(state) => Step::Confirm,
        Step::Events => Step::Details,
        Step::Details => Step::Confirm,
        Step::Confirm => Step::Confirm,
    }
}

/// Where `prev` lands from the current step, floored at `Identity`.
/// Backward navigation never validates and never clears data.
#[must_use]
pub fn backward_target(state: &RsvpState) -> Step {
    match state.step {
        Step::Identity => Step::Identity,
        Step::Events => Step::Identity,
        Step::Details => Step::Events,
        Step::Confirm if skips_details(state) => Step::Events,
        Step::Confirm => Step::Details,
    }
}

/// Steps reachable in one navigation from the current step, backward
/// first. Self-transitions (the floor at `Identity`, the no-op `next`
/// on `Confirm`) are not listed; hosts use this to enable or disable
/// the navigation controls.
#[must_use]
pub fn allowed_targets(state: &RsvpState) -> Vec<Step> {
    let mut targets = Vec::new();
    let back = backward_target(state);
    if back != state.step {
        targets.push(back);
    }
    let forward = forward_target(state);
    if forward != state.step {
        targets.push(forward);
    }
    targets
}
