// SPDX-License-Identifier: MPL-2.0
//! Theme mode and the colors used to tell screen states apart.

use crate::domain::screen::{ExistingState, NewScreenState, ScreenRecord};
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors of the screen list.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub row_highlight: Color,
    pub status_new: Color,
    pub status_equal: Color,
    pub status_below_threshold: Color,
    pub status_above_threshold: Color,
    pub status_inactive: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            row_highlight: palette::PRIMARY_200,
            status_new: palette::INFO_500,
            status_equal: palette::SUCCESS_500,
            status_below_threshold: palette::WARNING_500,
            status_above_threshold: palette::ERROR_500,
            status_inactive: palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            row_highlight: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_700
            },
            status_inactive: palette::GRAY_200,
            ..Self::light()
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Accent color for a record's status label.
    #[must_use]
    pub fn status_color(&self, record: &ScreenRecord) -> Color {
        match (record.new_screen, record.existing) {
            (NewScreenState::AutoApproved | NewScreenState::UnApproved, _) => self.status_new,
            (_, ExistingState::Equal) => self.status_equal,
            (_, ExistingState::BelowThreshold) => self.status_below_threshold,
            (_, ExistingState::AboveThreshold) => self.status_above_threshold,
            (NewScreenState::None, ExistingState::None) => self.status_inactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }

    #[test]
    fn above_threshold_is_flagged_as_error() {
        let scheme = ColorScheme::light();
        let mut record = ScreenRecord::new("a.png");
        record.existing = ExistingState::AboveThreshold;
        assert_eq!(scheme.status_color(&record), palette::ERROR_500);
    }

    #[test]
    fn inactive_record_is_gray() {
        let scheme = ColorScheme::dark();
        let record = ScreenRecord::new("a.png");
        assert_eq!(scheme.status_color(&record), palette::GRAY_200);
    }
}
