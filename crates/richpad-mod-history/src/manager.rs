/// Linear snapshot history with a step cursor.
///
/// Every commit stores the full editor content. Undo and redo move a cursor
/// over the stored snapshots; recording after an undo drops the snapshots
/// ahead of the cursor, so there is never more than one redo branch.
use std::collections::VecDeque;

use crate::config::HistoryConfig;
use crate::snapshot::Snapshot;

/// Bounded undo/redo buffer for a single editor instance.
pub struct SnapshotHistory {
    /// Stored snapshots, oldest first.
    entries: VecDeque<Snapshot>,
    /// Index of the current snapshot. `None` exactly when `entries` is empty.
    cursor: Option<usize>,
    /// Max snapshots retained (always >= 1).
    capacity: usize,
}

impl std::fmt::Debug for SnapshotHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotHistory")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

impl SnapshotHistory {
    /// Creates an empty history using the configured capacity.
    pub fn new(config: &HistoryConfig) -> Self {
        Self::with_capacity(config.effective_capacity())
    }

    /// Creates an empty history holding at most `capacity` snapshots.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            cursor: None,
            capacity,
        }
    }

    /// Records a snapshot as the new current state.
    ///
    /// Drops any redo snapshots, skips the push when the newest stored
    /// snapshot is identical, and evicts the oldest snapshot on overflow.
    pub fn record(&mut self, snapshot: impl Into<Snapshot>) {
        let snapshot = snapshot.into();

        if let Some(cursor) = self.cursor {
            if cursor + 1 < self.entries.len() {
                tracing::trace!(
                    dropped = self.entries.len() - cursor - 1,
                    "Truncating redo snapshots"
                );
                self.entries.truncate(cursor + 1);
            }
        }

        if self.entries.back() == Some(&snapshot) {
            return;
        }

        self.entries.push_back(snapshot);
        let mut cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            cursor -= 1;
            tracing::trace!(capacity = self.capacity, "Evicted oldest snapshot");
        }
        self.cursor = Some(cursor);
    }

    /// Steps back one snapshot and returns it.
    ///
    /// Returns `None` (and changes nothing) at the oldest snapshot or when
    /// the history is empty.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    /// Steps forward one snapshot and returns it.
    ///
    /// Returns `None` (and changes nothing) at the newest snapshot or when
    /// the history is empty.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.entries.len())? + 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    /// Returns the current snapshot, if any.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor?)
    }

    /// Whether `undo` would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Whether `redo` would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over stored snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.entries.iter()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(history: &SnapshotHistory) -> Vec<&str> {
        history.snapshots().map(Snapshot::as_str).collect()
    }

    #[test]
    fn test_empty_history() {
        let mut history = SnapshotHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(SnapshotHistory::default().capacity(), 50);
    }

    #[test]
    fn test_record_sets_cursor_to_last() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        history.record("b");
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.current().unwrap(), "b");
    }

    #[test]
    fn test_identical_consecutive_snapshots_coalesce() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        history.record("a");
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_non_adjacent_repeats_are_kept() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        history.record("b");
        history.record("a");
        assert_eq!(contents(&history), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_undo_redo_basic() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        history.record("b");

        assert_eq!(history.undo().unwrap(), "a");
        assert_eq!(history.current().unwrap(), "a");
        assert!(history.can_redo());

        assert_eq!(history.redo().unwrap(), "b");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_redo_at_newest_is_noop() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        history.record("b");
        assert!(history.redo().is_none());
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_record_after_undo_truncates_branch() {
        let mut history = SnapshotHistory::default();
        history.record("A");
        history.record("B");
        history.record("C");
        history.undo();
        history.record("D");

        assert_eq!(contents(&history), vec!["A", "B", "D"]);
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_matching_cursor_after_undo_only_truncates() {
        let mut history = SnapshotHistory::default();
        history.record("A");
        history.record("B");
        history.record("C");
        history.undo();
        history.record("B");

        assert_eq!(contents(&history), vec!["A", "B"]);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_capacity_worked_example() {
        let mut history = SnapshotHistory::with_capacity(3);
        for s in ["a", "b", "c", "d"] {
            history.record(s);
        }
        assert_eq!(contents(&history), vec!["b", "c", "d"]);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current().unwrap(), "d");

        assert_eq!(history.undo().unwrap(), "c");
        assert_eq!(history.undo().unwrap(), "b");
        assert!(history.undo().is_none());
        assert_eq!(history.current().unwrap(), "b");
    }

    #[test]
    fn test_capacity_one_keeps_latest() {
        let mut history = SnapshotHistory::with_capacity(0);
        assert_eq!(history.capacity(), 1);
        history.record("a");
        history.record("b");
        assert_eq!(contents(&history), vec!["b"]);
        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_clear() {
        let mut history = SnapshotHistory::default();
        history.record("a");
        history.record("b");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
    }
}
