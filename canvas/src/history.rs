//! Linear undo history over serialized raster snapshots.
//!
//! Each entry is a full snapshot of the surface, not a diff; the cursor
//! points at the entry currently displayed. Appending after an undo
//! truncates everything past the cursor, so the history is strictly linear —
//! undone states become unreachable as soon as a new action commits.
//!
//! Stacks are scoped by [`ScopePolicy`]: per subject (each (sex, view) pair
//! owns its own lazily-created stack) or shared (one stack across subject
//! switches, reproducing the behavior of a single global history array).

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assets::Subject;

/// An opaque serialized snapshot of the full surface at one point in time.
/// In the browser this is a PNG data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(pub String);

/// Ordered snapshots plus a cursor implementing linear undo.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the first entry. No-op if the stack already has entries.
    pub fn seed(&mut self, entry: Snapshot) {
        if self.entries.is_empty() {
            self.entries.push(entry);
            self.cursor = 0;
        }
    }

    /// Append an entry after the cursor, discarding any undone entries
    /// beyond it, and move the cursor to the new entry.
    pub fn push(&mut self, entry: Snapshot) {
        if self.entries.is_empty() {
            self.entries.push(entry);
            self.cursor = 0;
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor back one entry. Returns `false` (and leaves the
    /// cursor in place) when already at the first entry or empty.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// The entry at the cursor, i.e. the state currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How history stacks relate to subject switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePolicy {
    /// Each (sex, view) pair owns its own stack; switching subjects is a
    /// pure context switch and stale snapshots can never be replayed onto a
    /// surface with a different background.
    #[default]
    PerSubject,
    /// One stack shared across all subjects ("resume where you left off").
    Shared,
}

/// Owns every live history stack and routes operations by subject.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    policy: ScopePolicy,
    per_subject: HashMap<Subject, HistoryStack>,
    shared: HistoryStack,
}

impl HistoryStore {
    #[must_use]
    pub fn new(policy: ScopePolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    #[must_use]
    pub fn policy(&self) -> ScopePolicy {
        self.policy
    }

    /// The stack for `subject`, if it exists yet.
    #[must_use]
    pub fn stack(&self, subject: Subject) -> Option<&HistoryStack> {
        match self.policy {
            ScopePolicy::Shared => Some(&self.shared),
            ScopePolicy::PerSubject => self.per_subject.get(&subject),
        }
    }

    /// The stack for `subject`, created lazily for per-subject scoping.
    pub fn stack_mut(&mut self, subject: Subject) -> &mut HistoryStack {
        match self.policy {
            ScopePolicy::Shared => &mut self.shared,
            ScopePolicy::PerSubject => self.per_subject.entry(subject).or_default(),
        }
    }
}
