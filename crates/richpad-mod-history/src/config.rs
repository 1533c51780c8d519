/// Configuration for the snapshot history and typing debounce.
use std::time::Duration;

/// Maximum number of snapshots kept per editor instance.
pub const DEFAULT_CAPACITY: usize = 50;

/// Quiet period in milliseconds after the last keystroke before
/// free typing is committed as a snapshot.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Configuration for the history system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots retained. Values below 1 are treated as 1.
    pub capacity: usize,
    /// Debounce quiet period in milliseconds.
    pub debounce_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl HistoryConfig {
    /// Returns the debounce quiet period as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Returns the capacity actually enforced by the history.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.capacity, 50);
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_debounce_duration() {
        let config = HistoryConfig {
            capacity: 10,
            debounce_ms: 250,
        };
        assert_eq!(config.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let config = HistoryConfig {
            capacity: 0,
            debounce_ms: 0,
        };
        assert_eq!(config.effective_capacity(), 1);
    }
}
