// Re-exports from richpad-mod-history used by the editor shell.
pub use richpad_mod_history::{Debouncer, HistoryConfig, Snapshot, SnapshotHistory};
