// SPDX-License-Identifier: MPL-2.0
//! Color schemes for the light and dark dashboard themes.
//!
//! Widgets get the active [`iced::Theme`] in their style closures;
//! [`ColorScheme::of`] maps it back to the dashboard colors so surfaces and
//! status colors stay consistent in both modes.

use crate::api::LiveStatus;
use crate::connectivity::Status;
use crate::preferences::EffectiveTheme;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub separator: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_tertiary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_100,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            separator: palette::GRAY_100,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_800,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            separator: palette::GRAY_700,
        }
    }

    #[must_use]
    pub fn for_theme(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::light(),
            EffectiveTheme::Dark => Self::dark(),
        }
    }

    /// Scheme matching an iced theme, as seen from a style closure.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        Self::for_theme(EffectiveTheme::from_dark(theme.extended_palette().is_dark))
    }

    /// Indicator color for the backend connection.
    #[must_use]
    pub fn connection_color(&self, status: Status) -> Color {
        match status {
            Status::Unknown => self.text_muted,
            Status::Connected => self.success,
            Status::Disconnected => self.error,
        }
    }

    /// Indicator color for the live channel.
    #[must_use]
    pub fn live_color(&self, status: LiveStatus) -> Color {
        match status {
            LiveStatus::Initial | LiveStatus::Closed => self.text_muted,
            LiveStatus::Connecting => self.warning,
            LiveStatus::Open => self.success,
            LiveStatus::Error => self.error,
        }
    }

    /// Translucent fill behind the offline banner.
    #[must_use]
    pub fn banner_background(&self) -> Color {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..self.error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_share_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::of(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::of(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn status_colors_distinguish_states() {
        let scheme = ColorScheme::light();
        assert_eq!(scheme.connection_color(Status::Connected), scheme.success);
        assert_eq!(scheme.connection_color(Status::Disconnected), scheme.error);
        assert_eq!(scheme.live_color(LiveStatus::Open), scheme.success);
        assert_eq!(scheme.live_color(LiveStatus::Closed), scheme.text_muted);
    }

    #[test]
    fn banner_background_is_translucent() {
        let banner = ColorScheme::dark().banner_background();
        assert!(banner.a > 0.0 && banner.a < 1.0);
    }
}
