// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::connectivity::RetryIndicator;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (refresh, connect).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Disabled => return disabled(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button that only shows a background on hover.
///
/// Used for the top bar toggles and the sidebar collapse control.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let background = match status {
        button::Status::Hovered => Some(Background::Color(colors.surface_tertiary)),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.surface_tertiary
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar navigation entry; `active` marks the current screen.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        if !active {
            return ghost(theme, status);
        }

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_STRONG,
                ..colors.brand_secondary
            },
            button::Status::Active | button::Status::Disabled => colors.brand_secondary,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.brand_primary,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Retry button of the offline banner.
///
/// Outlined in the error color while the retry is shaking or showing its
/// failure icon.
pub fn retry(indicator: RetryIndicator) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let failed = indicator.shows_failure();

        let background = match status {
            button::Status::Hovered => colors.surface_tertiary,
            _ => colors.surface_primary,
        };
        let border_width = if failed {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if failed {
                colors.error
            } else {
                colors.text_primary
            },
            border: Border {
                color: colors.error,
                width: border_width,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn disabled_primary_is_grayed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn ghost_only_fills_on_hover() {
        assert!(ghost(&Theme::Light, button::Status::Active).background.is_none());
        assert!(ghost(&Theme::Light, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn active_nav_item_is_highlighted() {
        let active = nav_item(true)(&Theme::Light, button::Status::Active);
        let inactive = nav_item(false)(&Theme::Light, button::Status::Active);
        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
        assert_eq!(active.text_color, ColorScheme::light().brand_primary);
    }

    #[test]
    fn failed_retry_is_emphasized() {
        let now = Instant::now();
        let idle = retry(RetryIndicator::Idle)(&Theme::Dark, button::Status::Active);
        let failed =
            retry(RetryIndicator::FailureIcon { until: now })(&Theme::Dark, button::Status::Active);
        assert!(failed.border.width > idle.border.width);
        assert_eq!(failed.text_color, ColorScheme::dark().error);
    }
}
