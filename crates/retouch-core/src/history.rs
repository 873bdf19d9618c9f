//! Bounded linear undo/redo history.
//!
//! The history is a single timeline of snapshots with a cursor marking the
//! current one. Pushing after an undo discards everything after the cursor
//! (no branching), and pushing past capacity evicts the oldest snapshot.
//!
//! ```text
//!  push A, B, C        undo           push D
//!  [A, B, C]           [A, B, C]      [A, B, D]
//!         ^                ^                 ^
//! ```
//!
//! Entries are owned values. Accessors hand out shared borrows, so nothing
//! outside the history can change a stored snapshot; callers that need an
//! owned copy clone it.

use std::collections::VecDeque;

use log::debug;

/// Number of snapshots kept when no capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// A capacity-bounded, branch-discarding undo/redo stack.
#[derive(Debug, Clone)]
pub struct EditHistory<T> {
    entries: VecDeque<T>,
    /// `None` iff `entries` is empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl<T> Default for EditHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EditHistory<T> {
    /// Create an empty history with [`DEFAULT_HISTORY_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` snapshots.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Append `entry` as the new current snapshot.
    ///
    /// Any redo-able entries after the cursor are discarded first. If the
    /// history is then over capacity, the oldest entry is evicted.
    pub fn push(&mut self, entry: T) {
        if let Some(cursor) = self.cursor {
            let keep = cursor + 1;
            if keep < self.entries.len() {
                debug!(
                    "history: discarding {} redo entries",
                    self.entries.len() - keep
                );
                self.entries.truncate(keep);
            }
        }

        self.entries.push_back(entry);

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            debug!("history: evicted oldest entry (capacity {})", self.capacity);
        }

        self.cursor = Some(self.entries.len() - 1);
        debug!(
            "history: pushed entry, {} of {} slots used",
            self.entries.len(),
            self.capacity
        );
    }

    /// True iff there is an older snapshot to step back to.
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    /// True iff there is a newer snapshot to step forward to.
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    /// Step back one snapshot and return it.
    ///
    /// Returns `None` and leaves the history untouched at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        let cursor = self.cursor? - 1;
        self.cursor = Some(cursor);
        debug!("history: undo to entry {cursor}");
        self.entries.get(cursor)
    }

    /// Step forward one snapshot and return it.
    ///
    /// Returns `None` and leaves the history untouched at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor? + 1;
        self.cursor = Some(cursor);
        debug!("history: redo to entry {cursor}");
        self.entries.get(cursor)
    }

    /// The snapshot at the cursor, or `None` if the history is empty.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor?)
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
