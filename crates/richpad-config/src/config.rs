/// Editor configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use richpad_mod_history::HistoryConfig;
use serde::{Deserialize, Serialize};

use crate::color::{default_palette, HexColor};
use crate::theme::ThemeMode;

const MIN_HEIGHT: u32 = 50;
const MAX_HEIGHT: u32 = 4000;
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Toolbar shown when the config does not override it.
pub const DEFAULT_TOOLBAR: [&str; 7] = [
    "bold",
    "italic",
    "underline",
    "heading",
    "list",
    "link",
    "image",
];

/// Per-editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum height of the editable surface in pixels.
    pub height: u32,
    /// Text shown while the surface is empty.
    pub placeholder: String,
    /// Toolbar tool names, in display order. Unknown names are ignored.
    pub toolbar: Vec<String>,
    pub theme: ThemeMode,
    /// Max undo snapshots kept (minimum 1).
    pub history_capacity: usize,
    /// Quiet period before typing is committed to history.
    pub debounce_ms: u64,
    /// Colours offered by the text and highlight colour pickers.
    pub palette: Vec<HexColor>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            height: 300,
            placeholder: "Start writing...".to_string(),
            toolbar: DEFAULT_TOOLBAR.iter().map(|s| s.to_string()).collect(),
            theme: ThemeMode::default(),
            history_capacity: richpad_mod_history::config::DEFAULT_CAPACITY,
            debounce_ms: richpad_mod_history::config::DEFAULT_DEBOUNCE_MS,
            palette: default_palette(),
        }
    }
}

impl EditorConfig {
    /// Returns the config file path: exe directory + `richpad.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("richpad.json")))
            .unwrap_or_else(|| PathBuf::from("richpad.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            return config;
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| tracing::warn!("Failed to read config at {}: {e}", path.display()))
            .and_then(|contents| {
                serde_json::from_str::<EditorConfig>(&contents).map_err(|e| {
                    tracing::warn!("Failed to parse config at {}: {e}", path.display())
                })
            });

        // A broken file is left untouched so the user can fix it.
        let mut config = parsed.unwrap_or_default();
        config.sanitize();
        config
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.height = self.height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        self.history_capacity = self.history_capacity.max(1);
        self.debounce_ms = self.debounce_ms.min(MAX_DEBOUNCE_MS);
        if self.palette.is_empty() {
            self.palette = default_palette();
        }
    }

    /// History settings derived from this config.
    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig {
            capacity: self.history_capacity,
            debounce_ms: self.debounce_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.height, 300);
        assert_eq!(config.placeholder, "Start writing...");
        assert_eq!(config.toolbar.len(), 7);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.palette.len(), 8);
    }

    #[test]
    fn test_sanitize_clamps_height() {
        let mut config = EditorConfig {
            height: 10,
            ..Default::default()
        };
        config.sanitize();
        assert_eq!(config.height, 50);

        config.height = 100_000;
        config.sanitize();
        assert_eq!(config.height, 4000);
    }

    #[test]
    fn test_sanitize_raises_zero_capacity() {
        let mut config = EditorConfig {
            history_capacity: 0,
            ..Default::default()
        };
        config.sanitize();
        assert_eq!(config.history_capacity, 1);
    }

    #[test]
    fn test_sanitize_caps_debounce() {
        let mut config = EditorConfig {
            debounce_ms: 60_000,
            ..Default::default()
        };
        config.sanitize();
        assert_eq!(config.debounce_ms, 10_000);
    }

    #[test]
    fn test_sanitize_restores_empty_palette() {
        let mut config = EditorConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        config.sanitize();
        assert_eq!(config.palette, default_palette());
    }

    #[test]
    fn test_history_config() {
        let config = EditorConfig {
            history_capacity: 7,
            debounce_ms: 120,
            ..Default::default()
        };
        let history = config.history_config();
        assert_eq!(history.capacity, 7);
        assert_eq!(history.debounce_ms, 120);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let parsed: EditorConfig = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(parsed.theme, ThemeMode::Dark);
        assert_eq!(parsed.history_capacity, 50);
        assert_eq!(parsed.toolbar, DEFAULT_TOOLBAR.to_vec());
    }
}
