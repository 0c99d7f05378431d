// SPDX-License-Identifier: MPL-2.0
//! Insights screen: at-a-glance backend, volume and live channel status.

use crate::api::LiveChannel;
use crate::connectivity::Monitor;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::volumes;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub backend_url: &'a str,
    pub monitor: &'a Monitor,
    pub volumes: &'a volumes::State,
    pub live: &'a LiveChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenVolumes,
    OpenActivity,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let status = ctx.monitor.status();
    let live_status = ctx.live.status();

    let backend = summary_card(
        i18n.tr("insights-backend"),
        i18n.tr(status.i18n_key()),
        move |colors| colors.connection_color(status),
        vec![
            ctx.backend_url.to_string(),
            i18n.tr_with_args(
                "insights-latency",
                &[("latency", &ctx.monitor.formatted_latency())],
            ),
        ],
        None,
    );

    let volume_value = if ctx.volumes.has_listing() {
        ctx.volumes.count().to_string()
    } else {
        "—".to_string()
    };
    let volume_card = summary_card(
        i18n.tr("insights-volumes"),
        volume_value,
        |colors| colors.text_primary,
        Vec::new(),
        Some((i18n.tr("insights-open-volumes"), Message::OpenVolumes)),
    );

    let live_card = summary_card(
        i18n.tr("insights-live"),
        i18n.tr(live_status.i18n_key()),
        move |colors| colors.live_color(live_status),
        Vec::new(),
        Some((i18n.tr("insights-open-activity"), Message::OpenActivity)),
    );

    let cards = Row::new()
        .spacing(spacing::MD)
        .push(backend)
        .push(volume_card)
        .push(live_card);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("insights-heading")).size(typography::TITLE_LG))
        .push(cards)
        .into()
}

fn summary_card<'a>(
    title: String,
    value: String,
    accent: impl Fn(&ColorScheme) -> Color + 'a,
    details: Vec<String>,
    action: Option<(String, Message)>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_muted),
                }),
        )
        .push(
            Text::new(value)
                .size(typography::TITLE_MD)
                .style(move |theme: &Theme| text::Style {
                    color: Some(accent(&ColorScheme::of(theme))),
                }),
        );

    for detail in details {
        column = column.push(Text::new(detail).size(typography::CAPTION));
    }

    if let Some((label, message)) = action {
        column = column.push(
            button(Text::new(label).size(typography::BODY_SM))
                .on_press(message)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::ghost),
        );
    }

    Container::new(column)
        .width(Length::FillPortion(1))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
