// SPDX-License-Identifier: MPL-2.0
//! Top bar with the screen title and the theme and language toggles.

use crate::app::Screen;
use crate::i18n::I18n;
use crate::preferences::{Language, ThemeMode};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, tooltip, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the top bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub language: Language,
}

/// Messages emitted by the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CycleTheme,
    ToggleLanguage,
}

/// Glyph shown on the theme toggle for the current mode.
#[must_use]
pub fn theme_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
        ThemeMode::System => "◐",
    }
}

/// Render the top bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Container::new(Text::new(ctx.i18n.tr(ctx.screen.title_key())).size(typography::TITLE_MD))
        .width(Length::Fill);

    let theme_button = styles::with_tooltip(
        toggle_button(theme_glyph(ctx.theme_mode), Message::CycleTheme),
        ctx.i18n.tr(ctx.theme_mode.i18n_key()),
        tooltip::Position::Bottom,
    );

    let language_button = styles::with_tooltip(
        toggle_button(ctx.language.code(), Message::ToggleLanguage),
        ctx.i18n.tr("topbar-language-tooltip"),
        tooltip::Position::Bottom,
    );

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .push(title)
        .push(theme_button)
        .push(language_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOPBAR_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

fn toggle_button<'a>(label: &'static str, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY_LG))
            .center_x(Length::Fixed(sizing::ICON_LG))
            .center_y(Length::Fixed(sizing::ICON_LG)),
    )
    .on_press(message)
    .padding(0)
    .style(styles::button::ghost)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_mode_has_its_own_glyph() {
        assert_ne!(theme_glyph(ThemeMode::Light), theme_glyph(ThemeMode::Dark));
        assert_ne!(theme_glyph(ThemeMode::Dark), theme_glyph(ThemeMode::System));
        assert_ne!(theme_glyph(ThemeMode::System), theme_glyph(ThemeMode::Light));
    }

    #[test]
    fn view_builds_for_both_languages() {
        for language in [Language::En, Language::Zh] {
            let i18n = I18n::new(language);
            let _ = view(ViewContext {
                i18n: &i18n,
                screen: Screen::Volumes,
                theme_mode: ThemeMode::System,
                language,
            });
        }
    }
}
