//! Derived-list maintenance.
//!
//! The companion and child lists are derived from the adult/child
//! counters. The rule lives in one explicit pure function the reducer
//! calls whenever a counter changes, so it is testable in isolation.

/// Return `list` resized to exactly `target` entries.
///
/// Shrinking truncates from the tail; growing appends values from
/// `blank`. Surviving entries keep their order and content.
#[must_use]
pub fn resized<T: Clone>(list: &[T], target: usize, blank: impl Fn() -> T) -> Vec<T> {
    let mut out: Vec<T> = list.iter().take(target).cloned().collect();
    while out.len() < target {
        out.push(blank());
    }
    out
}
