/// Snapshot-based undo/redo history for the rich-text editor.
///
/// Provides a `SnapshotHistory` that stores whole-document snapshots in a
/// bounded linear buffer, and a `Debouncer` used to collapse bursts of
/// typing into a single commit.
pub mod config;
pub mod debounce;
pub mod manager;
pub mod snapshot;

pub use config::HistoryConfig;
pub use debounce::Debouncer;
pub use manager::SnapshotHistory;
pub use snapshot::Snapshot;
