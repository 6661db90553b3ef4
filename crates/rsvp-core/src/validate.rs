//! Per-step validation.
//!
//! Pure: takes a state, returns the error map for the step being left.
//! Only forward navigation validates; backward navigation and field
//! edits never do.

use crate::error::{ErrorKey, ErrorMap};
use crate::types::{RsvpState, Step};

/// Shown when the name is missing or implausibly short.
pub const MSG_NAME_REQUIRED: &str = "Por favor, dinos tu nombre completo.";
/// Shown when no contact detail was given.
pub const MSG_CONTACT_REQUIRED: &str = "Necesitamos un contacto para confirmarte.";
/// Shown when neither a day nor the decline option is selected.
pub const MSG_EVENTS_REQUIRED: &str = "Selecciona al menos un evento o indica que no asistirás.";
/// Shown while any companion slot has a blank name.
pub const MSG_COMPANION_NAMES_REQUIRED: &str =
    "Por favor, escribe el nombre de todos tus acompañantes.";
/// Shown while any child slot has a blank name.
pub const MSG_CHILD_NAMES_REQUIRED: &str = "Por favor, escribe el nombre de todos los niños.";

/// Validate `step` against `state`. An empty map means the step may be
/// left. Menu choices are never validated; `Unset` is always legal.
#[must_use]
pub fn validate(state: &RsvpState, step: Step) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match step {
        Step::Identity => {
            if state.full_name.trim().chars().count() < 3 {
                errors.insert(ErrorKey::FullName, MSG_NAME_REQUIRED.to_string());
            }
            if state.contact.trim().is_empty() {
                errors.insert(ErrorKey::Contact, MSG_CONTACT_REQUIRED.to_string());
            }
        }
        Step::Events => {
            if !state.not_attending && !state.attending.any() {
                errors.insert(ErrorKey::Events, MSG_EVENTS_REQUIRED.to_string());
            }
        }
        Step::Details => {
            if state.companions.iter().any(|c| c.name.trim().is_empty()) {
                errors.insert(
                    ErrorKey::CompanionNames,
                    MSG_COMPANION_NAMES_REQUIRED.to_string(),
                );
            }
            if state.children.iter().any(|c| c.name.trim().is_empty()) {
                errors.insert(ErrorKey::ChildNames, MSG_CHILD_NAMES_REQUIRED.to_string());
            }
        }
        // Review step, nothing left to check.
        Step::Confirm => {}
    }
    errors
}
