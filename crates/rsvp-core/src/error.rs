//! Keyed inline errors.
//!
//! Validation attaches messages keyed by field/group; an edit to the
//! matching field removes exactly its key, independent of any later
//! re-validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The logical field or group an inline error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorKey {
    /// Primary respondent's name (identity step).
    FullName,
    /// Contact detail (identity step).
    Contact,
    /// Day selection (events step).
    Events,
    /// Companion name group (details step, aggregate).
    CompanionNames,
    /// Child name group (details step, aggregate).
    ChildNames,
    /// Banner-level error (configuration, delivery).
    General,
}

/// Inline errors keyed per field/group.
pub type ErrorMap = BTreeMap<ErrorKey, String>;
