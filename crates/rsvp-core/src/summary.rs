//! Review summary for the confirm step.
//!
//! Pure projection of the state into what the confirm card shows: the
//! primary name, companion names, total head count, short day chips,
//! and the notes. The host view renders it; nothing here formats HTML.

use crate::types::{Day, RsvpState};

/// What the confirm step displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The guest declined everything; the card shows the regret copy
    /// instead of the party breakdown.
    pub not_attending: bool,
    /// Primary respondent's name as typed.
    pub primary_name: String,
    /// Companion names, in slot order.
    pub companion_names: Vec<String>,
    /// Child names, in slot order.
    pub child_names: Vec<String>,
    /// Adults plus children.
    pub total_guests: u32,
    /// Short chips for the selected days ("31 Jul", "1 Ago", "2 Ago").
    pub day_tags: Vec<&'static str>,
    /// Dietary notes if any were given.
    pub dietary_notes: Option<String>,
}

impl Summary {
    /// Project `state` into its review summary.
    #[must_use]
    pub fn of(state: &RsvpState) -> Self {
        let notes = state.dietary_notes.trim();
        Summary {
            not_attending: state.not_attending,
            primary_name: state.full_name.clone(),
            companion_names: state.companions.iter().map(|c| c.name.clone()).collect(),
            child_names: state.children.iter().map(|c| c.name.clone()).collect(),
            total_guests: state.total_guests(),
            day_tags: state.attending.iter().map(Day::short_tag).collect(),
            dietary_notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

/// First word of the respondent's name, for the events-step greeting.
#[must_use]
pub fn first_name(state: &RsvpState) -> &str {
    state.full_name.trim().split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{apply, Action};

    #[test]
    fn summary_mirrors_the_party() {
        let state = RsvpState::default();
        let state = apply(&state, Action::SetFullName("Juan Perez".to_string()));
        let state = apply(&state, Action::ToggleDay(Day::Farewell));
        let state = apply(&state, Action::AdjustAdults(1));
        let state = apply(
            &state,
            Action::SetCompanionName {
                index: 0,
                name: "Marta".to_string(),
            },
        );
        let state = apply(&state, Action::SetDietaryNotes("  sin gluten  ".to_string()));

        let summary = Summary::of(&state);
        assert!(!summary.not_attending);
        assert_eq!(summary.primary_name, "Juan Perez");
        assert_eq!(summary.companion_names, vec!["Marta".to_string()]);
        assert_eq!(summary.total_guests, 2);
        assert_eq!(summary.day_tags, vec!["1 Ago", "2 Ago"]);
        assert_eq!(summary.dietary_notes.as_deref(), Some("sin gluten"));
    }

    #[test]
    fn declined_summary_has_no_tags() {
        let state = apply(&RsvpState::default(), Action::ToggleNotAttending);
        let summary = Summary::of(&state);
        assert!(summary.not_attending);
        assert!(summary.day_tags.is_empty());
    }

    #[test]
    fn greeting_uses_the_first_word() {
        let mut state = RsvpState::default();
        state.full_name = "  Ana María Gómez ".to_string();
        assert_eq!(first_name(&state), "Ana");
        state.full_name.clear();
        assert_eq!(first_name(&state), "");
    }
}
