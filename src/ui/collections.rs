// SPDX-License-Identifier: MPL-2.0
//! Collections screen.
//!
//! The backend does not expose collections yet; the screen explains that.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Text};
use iced::{Element, Theme};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("collections-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("collections-empty"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_muted),
                }),
        )
        .into()
}
