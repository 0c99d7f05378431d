// SPDX-License-Identifier: MPL-2.0
//! Activity screen: the live channel and the last event it delivered.

use crate::api::LiveChannel;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub live: &'a LiveChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Connect,
    Disconnect,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let live = ctx.live;
    let status = live.status();

    let toggle = if live.is_active() {
        button(Text::new(i18n.tr("live-disconnect")).size(typography::BODY_SM))
            .on_press(Message::Disconnect)
            .style(styles::button::ghost)
    } else {
        button(Text::new(i18n.tr("live-connect")).size(typography::BODY_SM))
            .on_press(Message::Connect)
            .style(styles::button::primary)
    };

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("◆").size(typography::BODY).style(move |theme: &Theme| {
            text::Style {
                color: Some(ColorScheme::of(theme).live_color(status)),
            }
        }))
        .push(
            Container::new(Text::new(i18n.tr(status.i18n_key())).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(toggle.padding([spacing::XXS, spacing::MD]));

    let endpoint = Text::new(live.url())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_muted),
        });

    let latest: Element<'a, Message> = match (live.last_message(), live.last_error()) {
        (_, Some(error)) => Text::new(i18n.tr_with_args("activity-error", &[("error", error)]))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::of(theme).error),
            })
            .into(),
        (Some(message), None) => Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("activity-last-message")).size(typography::BODY_SM))
                .push(Text::new(message).size(typography::BODY)),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into(),
        (None, None) => Text::new(i18n.tr("activity-empty"))
            .size(typography::BODY)
            .into(),
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(endpoint)
        .push(latest)
        .into()
}
