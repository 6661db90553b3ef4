//! Vocabulary types and the form state record.
//!
//! Field semantics follow the invitation site's RSVP card: three
//! independently selectable celebration days, an opt-out decline flag,
//! adult/child counters that drive dynamically sized guest lists, and a
//! per-guest menu choice.

use crate::error::ErrorMap;
use serde::{Deserialize, Serialize};

/// A wizard step, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Who is answering (name + contact).
    Identity,
    /// Which days the party will attend.
    Events,
    /// Head counts, guest names, menus, dietary notes.
    Details,
    /// Read-only review + submit.
    Confirm,
}

impl Step {
    /// All steps in visit order.
    pub const ALL: [Step; 4] = [Step::Identity, Step::Events, Step::Details, Step::Confirm];

    /// 1-based position, as shown in the progress bar.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Events => 2,
            Step::Details => 3,
            Step::Confirm => 4,
        }
    }

    /// Progress-bar caption for this step.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::Identity => "Tú",
            Step::Events => "Asistencia",
            Step::Details => "Detalles",
            Step::Confirm => "Confirmar",
        }
    }
}

/// The three celebration days, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    /// 31 Julio — welcome dinner and cocktails.
    Welcome,
    /// 1 Agosto — ceremony and party.
    Wedding,
    /// 2 Agosto — farewell brunch.
    Farewell,
}

/// Marker sent in place of day labels when the guest declines.
pub const NOT_ATTENDING_LABEL: &str = "No asistirá";

impl Day {
    /// All days in calendar order.
    pub const ALL: [Day; 3] = [Day::Welcome, Day::Wedding, Day::Farewell];

    /// Human-readable label used on the wire and in confirmations.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Day::Welcome => "31 Julio (Bienvenida)",
            Day::Wedding => "1 Agosto (Boda)",
            Day::Farewell => "2 Agosto (Despedida)",
        }
    }

    /// Short tag for the review summary chips.
    #[must_use]
    pub fn short_tag(self) -> &'static str {
        match self {
            Day::Welcome => "31 Jul",
            Day::Wedding => "1 Ago",
            Day::Farewell => "2 Ago",
        }
    }
}

/// Which of the three days are selected. The three flags are mutually
/// independent; the decline flag in [`RsvpState`] is exclusive with all
/// of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySet {
    /// Attending the welcome dinner (31 Julio).
    pub welcome: bool,
    /// Attending the wedding itself (1 Agosto).
    pub wedding: bool,
    /// Attending the farewell brunch (2 Agosto).
    pub farewell: bool,
}

impl DaySet {
    /// Set containing only the wedding day (the opt-out default).
    #[must_use]
    pub fn wedding_only() -> Self {
        DaySet {
            wedding: true,
            ..DaySet::default()
        }
    }

    /// Whether `day` is selected.
    #[must_use]
    pub fn contains(self, day: Day) -> bool {
        match day {
            Day::Welcome => self.welcome,
            Day::Wedding => self.wedding,
            Day::Farewell => self.farewell,
        }
    }

    /// Flip a single day.
    pub fn toggle(&mut self, day: Day) {
        match day {
            Day::Welcome => self.welcome = !self.welcome,
            Day::Wedding => self.wedding = !self.wedding,
            Day::Farewell => self.farewell = !self.farewell,
        }
    }

    /// At least one day selected.
    #[must_use]
    pub fn any(self) -> bool {
        self.welcome || self.wedding || self.farewell
    }

    /// Deselect every day.
    pub fn clear(&mut self) {
        *self = DaySet::default();
    }

    /// Selected days in calendar order.
    pub fn iter(self) -> impl Iterator<Item = Day> {
        Day::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

/// Menu preference. Never required; `Unset` is a legal final answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuChoice {
    /// No preference given.
    #[default]
    Unset,
    /// Meat main course.
    Meat,
    /// Fish main course.
    Fish,
}

impl MenuChoice {
    /// Wire/summary label. Empty for `Unset`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Unset => "",
            MenuChoice::Meat => "Carne",
            MenuChoice::Fish => "Pescado",
        }
    }
}

/// An adult guest other than the primary respondent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    /// Full name, required before leaving the details step.
    pub name: String,
    /// Optional menu choice.
    pub menu: MenuChoice,
}

/// A child guest. Children pick no menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// Full name, required before leaving the details step.
    pub name: String,
}

/// Where the one-shot submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// One request is in flight; the trigger must stay disabled.
    Submitting,
    /// Dispatched. Terminal: the state is display-only from here on.
    Success,
    /// Dispatch failed. Retriable by submitting again.
    Error,
}

/// The whole wizard state. One instance per wizard, single owner,
/// mutated only by producing a new value through [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpState {
    /// Current wizard step.
    pub step: Step,
    /// Primary respondent's full name.
    pub full_name: String,
    /// Email or phone, free-form.
    pub contact: String,
    /// Selected celebration days.
    pub attending: DaySet,
    /// Declining everything. Exclusive with any selected day.
    pub not_attending: bool,
    /// Adults in the party, including the respondent.
    pub adult_count: u32,
    /// Children in the party.
    pub child_count: u32,
    /// The respondent's own menu choice.
    pub main_menu: MenuChoice,
    /// One entry per extra adult; length is always `max(0, adult_count - 1)`.
    pub companions: Vec<Companion>,
    /// One entry per child; length is always `child_count`.
    pub children: Vec<Child>,
    /// Allergies and diets, free text.
    pub dietary_notes: String,
    /// Hidden anti-automation field. Human users never see it, so any
    /// content here marks the submission as machine-filled.
    pub honeypot: String,
    /// Inline errors keyed by field/group, cleared on edit.
    pub errors: ErrorMap,
    /// Submission lifecycle.
    pub status: SubmissionStatus,
}

impl Default for RsvpState {
    fn default() -> Self {
        RsvpState {
            step: Step::Identity,
            full_name: String::new(),
            contact: String::new(),
            attending: DaySet::wedding_only(),
            not_attending: false,
            adult_count: 1,
            child_count: 0,
            main_menu: MenuChoice::Unset,
            companions: Vec::new(),
            children: Vec::new(),
            dietary_notes: String::new(),
            honeypot: String::new(),
            errors: ErrorMap::new(),
            status: SubmissionStatus::Idle,
        }
    }
}

impl RsvpState {
    /// How many companion slots the current adult count implies.
    #[must_use]
    pub fn companions_needed(&self) -> usize {
        self.adult_count.saturating_sub(1) as usize
    }

    /// Total head count, adults plus children.
    #[must_use]
    pub fn total_guests(&self) -> u32 {
        self.adult_count + self.child_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_mount_state() {
        let state = RsvpState::default();
        assert_eq!(state.step, Step::Identity);
        assert!(state.attending.wedding, "the wedding day is opt-out");
        assert!(!state.attending.welcome);
        assert!(!state.attending.farewell);
        assert_eq!(state.adult_count, 1);
        assert_eq!(state.child_count, 0);
        assert!(state.companions.is_empty());
        assert!(state.children.is_empty());
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn companions_needed_never_underflows() {
        let mut state = RsvpState::default();
        state.adult_count = 0;
        assert_eq!(state.companions_needed(), 0);
        state.adult_count = 4;
        assert_eq!(state.companions_needed(), 3);
    }

    #[test]
    fn day_set_iterates_in_calendar_order() {
        let set = DaySet {
            welcome: true,
            wedding: false,
            farewell: true,
        };
        let days: Vec<Day> = set.iter().collect();
        assert_eq!(days, vec![Day::Welcome, Day::Farewell]);
    }
}
