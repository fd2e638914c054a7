// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Theme preference persisted in the configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Maps the mode onto an Iced theme.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Cycles Light → Dark → System, for a toggle button.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_the_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        mode = mode.next();
        assert_eq!(mode, ThemeMode::Dark);
        mode = mode.next();
        assert_eq!(mode, ThemeMode::System);
        mode = mode.next();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn serializes_kebab_case() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "theme_mode",
            ThemeMode::System,
        )]))
        .unwrap();
        assert!(toml.contains("\"system\""));
    }
}
