// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Main content area behind the screens.
pub fn content(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Left sidebar column.
pub fn sidebar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.separator,
            width: border::WIDTH_SM,
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Card used for the screen summaries and list rows.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.separator,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Floating server info card next to the sidebar footer.
pub fn hover_card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    let base = colors.surface_primary;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.separator,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Persistent "backend unreachable" banner.
pub fn offline_banner(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.banner_background())),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.error,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the theme for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    let (background, text) = (colors.text_primary, colors.surface_primary);
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_inverts_theme_colors() {
        let style = tooltip(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("expected color background");
        };
        assert!(bg.r < 0.5);
        assert!(style.text_color.is_some());
    }

    #[test]
    fn banner_uses_error_outline() {
        let style = offline_banner(&Theme::Dark);
        assert_eq!(style.border.color, ColorScheme::dark().error);
    }

    #[test]
    fn hover_card_floats_above_content() {
        assert!(hover_card(&Theme::Light).shadow.blur_radius > 0.0);
    }
}
