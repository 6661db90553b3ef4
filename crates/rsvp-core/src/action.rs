//! Actions and the pure reducer.
//!
//! Every user interaction and every submission lifecycle event is an
//! [`Action`]; [`apply`] turns the old state plus one action into the
//! next state. No I/O happens here; the `rsvp-wizard` facade owns the
//! side effects and feeds their outcomes back in as actions.

use crate::error::ErrorKey;
use crate::resize::resized;
use crate::step_machine::{backward_target, forward_target};
use crate::types::{Child, Companion, Day, MenuChoice, RsvpState, SubmissionStatus};
use crate::validate::validate;
use serde::{Deserialize, Serialize};

/// One discrete state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Edit the respondent's name. Clears the name error.
    SetFullName(String),
    /// Edit the contact detail. Clears the contact error.
    SetContact(String),
    /// Flip one celebration day. Forces the decline flag off.
    ToggleDay(Day),
    /// Flip the decline flag. Turning it on deselects every day.
    ToggleNotAttending,
    /// Add or remove adults. Floored so the party keeps at least one
    /// adult unless at least one child is present.
    AdjustAdults(i32),
    /// Add or remove children. Floored at zero.
    AdjustChildren(i32),
    /// Pick the respondent's own menu.
    SetMainMenu(MenuChoice),
    /// Edit one companion's name. Clears the companion-group error.
    SetCompanionName {
        /// Slot position.
        index: usize,
        /// New name.
        name: String,
    },
    /// Pick one companion's menu.
    SetCompanionMenu {
        /// Slot position.
        index: usize,
        /// New choice.
        menu: MenuChoice,
    },
    /// Edit one child's name. Clears the child-group error.
    SetChildName {
        /// Slot position.
        index: usize,
        /// New name.
        name: String,
    },
    /// Edit the free-text dietary notes.
    SetDietaryNotes(String),
    /// Fill the hidden anti-automation field. Humans never trigger this.
    SetHoneypot(String),
    /// Validate the current step and advance (with the decline skip).
    Next,
    /// Go back one step, no validation, floored at the first step.
    Prev,
    /// A submission left for the sink.
    SubmissionStarted,
    /// The sink dispatched the payload.
    SubmissionSucceeded,
    /// Delivery failed; the message becomes the general banner.
    SubmissionFailed(String),
}

/// Pure transition function: `(state, action) -> state`.
///
/// A `Success` state is absorbing: any further action returns it
/// unchanged. Recovery from success is a full reset, not a transition.
#[must_use]
pub fn apply(state: &RsvpState, action: Action) -> RsvpState {
    if state.status == SubmissionStatus::Success {
        return state.clone();
    }

    let mut next = state.clone();
    match action {
        Action::SetFullName(value) => {
            next.full_name = value;
            next.errors.remove(&ErrorKey::FullName);
        }
        Action::SetContact(value) => {
            next.contact = value;
            next.errors.remove(&ErrorKey::Contact);
        }
        Action::ToggleDay(day) => {
            next.attending.toggle(day);
            next.not_attending = false;
            next.errors.remove(&ErrorKey::Events);
        }
        Action::ToggleNotAttending => {
            next.not_attending = !next.not_attending;
            if next.not_attending {
                next.attending.clear();
            }
            next.errors.remove(&ErrorKey::Events);
        }
        Action::AdjustAdults(delta) => {
            let target = clamped(next.adult_count, delta);
            if target >= 1 || next.child_count > 0 {
                next.adult_count = target;
                next.companions =
                    resized(&next.companions, next.companions_needed(), Companion::default);
            }
        }
        Action::AdjustChildren(delta) => {
            next.child_count = clamped(next.child_count, delta);
            next.children = resized(&next.children, next.child_count as usize, Child::default);
        }
        Action::SetMainMenu(menu) => next.main_menu = menu,
        Action::SetCompanionName { index, name } => {
            // Out-of-range edits can race a resize; ignore them.
            if let Some(slot) = next.companions.get_mut(index) {
                slot.name = name;
                next.errors.remove(&ErrorKey::CompanionNames);
            }
        }
        Action::SetCompanionMenu { index, menu } => {
            if let Some(slot) = next.companions.get_mut(index) {
                slot.menu = menu;
            }
        }
        Action::SetChildName { index, name } => {
            if let Some(slot) = next.children.get_mut(index) {
                slot.name = name;
                next.errors.remove(&ErrorKey::ChildNames);
            }
        }
        Action::SetDietaryNotes(value) => next.dietary_notes = value,
        Action::SetHoneypot(value) => next.honeypot = value,
        Action::Next => {
            let errors = validate(&next, next.step);
            if errors.is_empty() {
                next.errors.clear();
                next.step = forward_target(&next);
            } else {
                next.errors = errors;
            }
        }
        Action::Prev => next.step = backward_target(&next),
        Action::SubmissionStarted => {
            next.status = SubmissionStatus::Submitting;
            next.errors.remove(&ErrorKey::General);
        }
        Action::SubmissionSucceeded => next.status = SubmissionStatus::Success,
        Action::SubmissionFailed(message) => {
            next.status = SubmissionStatus::Error;
            next.errors.insert(ErrorKey::General, message);
        }
    }
    next
}

fn clamped(current: u32, delta: i32) -> u32 {
    u32::try_from((i64::from(current) + i64::from(delta)).max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Step;
    use pretty_assertions::assert_eq;

    fn gomez() -> RsvpState {
        let state = RsvpState::default();
        let state = apply(&state, Action::SetFullName("Ana Gomez".to_string()));
        apply(&state, Action::SetContact("ana@example.com".to_string()))
    }

    #[test]
    fn next_is_rejected_until_identity_is_valid() {
        let state = RsvpState::default();
        let state = apply(&state, Action::Next);
        assert_eq!(state.step, Step::Identity);
        assert!(state.errors.contains_key(&ErrorKey::FullName));

        let state = apply(&state, Action::SetFullName("Ana Gomez".to_string()));
        assert!(!state.errors.contains_key(&ErrorKey::FullName), "edit clears its error");

        let state = apply(&state, Action::SetContact("ana@example.com".to_string()));
        let state = apply(&state, Action::Next);
        assert_eq!(state.step, Step::Events);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn toggling_a_day_turns_the_decline_flag_off() {
        let state = apply(&RsvpState::default(), Action::ToggleNotAttending);
        assert!(state.not_attending);
        assert!(!state.attending.any());

        let state = apply(&state, Action::ToggleDay(Day::Welcome));
        assert!(!state.not_attending);
        assert!(state.attending.welcome);
    }

    #[test]
    fn declining_deselects_every_day() {
        let mut state = RsvpState::default();
        state.attending.welcome = true;
        state.attending.farewell = true;

        let state = apply(&state, Action::ToggleNotAttending);
        assert!(state.not_attending);
        assert!(!state.attending.any());
    }

    #[test]
    fn adult_floor_holds_without_children() {
        let state = RsvpState::default();
        let state = apply(&state, Action::AdjustAdults(-1));
        assert_eq!(state.adult_count, 1, "lone adult cannot be removed");

        let state = apply(&state, Action::AdjustChildren(1));
        let state = apply(&state, Action::AdjustAdults(-1));
        assert_eq!(state.adult_count, 0, "children unlock the floor");
    }

    #[test]
    fn counter_changes_resize_the_derived_lists() {
        let state = apply(&RsvpState::default(), Action::AdjustAdults(2));
        assert_eq!(state.companions.len(), 2);

        let state = apply(
            &state,
            Action::SetCompanionName {
                index: 0,
                name: "Luis".to_string(),
            },
        );
        let state = apply(&state, Action::AdjustAdults(1));
        assert_eq!(state.companions.len(), 3);
        assert_eq!(state.companions[0].name, "Luis", "growth preserves entries");

        let state = apply(&state, Action::AdjustAdults(-2));
        assert_eq!(state.companions.len(), 1);
        assert_eq!(state.companions[0].name, "Luis", "shrink truncates from the tail");
    }

    #[test]
    fn out_of_range_slot_edits_are_ignored() {
        let state = RsvpState::default();
        let next = apply(
            &state,
            Action::SetCompanionName {
                index: 5,
                name: "ghost".to_string(),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn decline_skips_details_forward_and_back() {
        let state = gomez();
        let state = apply(&state, Action::Next);
        let state = apply(&state, Action::ToggleNotAttending);
        let state = apply(&state, Action::Next);
        assert_eq!(state.step, Step::Confirm);

        let state = apply(&state, Action::Prev);
        assert_eq!(state.step, Step::Events);
    }

    #[test]
    fn attending_path_visits_details() {
        let state = gomez();
        let state = apply(&state, Action::Next);
        assert_eq!(state.step, Step::Events);
        let state = apply(&state, Action::Next);
        assert_eq!(state.step, Step::Details, "wedding day is selected by default");
    }

    #[test]
    fn failure_attaches_the_general_banner_and_start_clears_it() {
        let state = apply(
            &RsvpState::default(),
            Action::SubmissionFailed("Error de conexión. Inténtalo de nuevo.".to_string()),
        );
        assert_eq!(state.status, SubmissionStatus::Error);
        assert!(state.errors.contains_key(&ErrorKey::General));

        let state = apply(&state, Action::SubmissionStarted);
        assert_eq!(state.status, SubmissionStatus::Submitting);
        assert!(!state.errors.contains_key(&ErrorKey::General));
    }

    #[test]
    fn success_is_absorbing() {
        let state = apply(&RsvpState::default(), Action::SubmissionSucceeded);
        assert_eq!(state.status, SubmissionStatus::Success);

        let frozen = apply(&state, Action::SetFullName("late edit".to_string()));
        assert_eq!(frozen, state);
        let frozen = apply(&state, Action::SubmissionStarted);
        assert_eq!(frozen, state);
    }
}
