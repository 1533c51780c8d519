/// Editor colour scheme selection.
use serde::{Deserialize, Serialize};

/// Theme requested by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference.
    System,
}

/// Concrete theme after resolving `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value of the container's `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl ThemeMode {
    /// Resolves `System` to light or dark using the OS preference.
    ///
    /// Falls back to light when the preference cannot be detected.
    pub fn resolve(self) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => ResolvedTheme::Dark,
                _ => ResolvedTheme::Light,
            },
        }
    }
}
