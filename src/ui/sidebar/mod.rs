// SPDX-License-Identifier: MPL-2.0
//! Left sidebar: navigation, collapse toggle and the server status footer.
//!
//! Hovering the status footer opens the server info card through the
//! [`HoverCard`] controller. The card itself is rendered as a separate layer
//! by [`card_layer`] so it can extend past the sidebar.

mod hover_card;

pub use hover_card::{HoverCard, Phase as HoverPhase};

use crate::api::LiveChannel;
use crate::app::Screen;
use crate::connectivity::Monitor;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, text, tooltip, Column, Container, Row, Text};
use iced::{Element, Length, Padding, Point, Theme};
use std::time::Instant;

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub collapsed: bool,
    pub monitor: &'a Monitor,
    pub live: &'a LiveChannel,
}

/// Contextual data needed to render the server info card.
pub struct CardContext<'a> {
    pub i18n: &'a I18n,
    pub backend_url: &'a str,
    pub monitor: &'a Monitor,
    pub live: &'a LiveChannel,
    pub hover_card: &'a HoverCard,
}

/// Messages emitted by the sidebar and its card.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleCollapsed,
    TriggerEntered,
    TriggerMoved(Point),
    TriggerLeft,
    CardEntered,
    CardLeft,
    ConnectLive,
    DisconnectLive,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Screen),
    ToggleCollapsed,
    ConnectLive,
    DisconnectLive,
}

/// Process a sidebar message, feeding hover events to the card controller.
pub fn update(message: Message, hover_card: &mut HoverCard, now: Instant) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::ToggleCollapsed => {
            hover_card.reset();
            Event::ToggleCollapsed
        }
        Message::TriggerEntered => {
            hover_card.trigger_entered(now);
            Event::None
        }
        Message::TriggerMoved(point) => {
            hover_card.trigger_moved(point);
            Event::None
        }
        Message::TriggerLeft => {
            hover_card.trigger_left(now);
            Event::None
        }
        Message::CardEntered => {
            hover_card.card_entered();
            Event::None
        }
        Message::CardLeft => {
            hover_card.card_left(now);
            Event::None
        }
        Message::ConnectLive => Event::ConnectLive,
        Message::DisconnectLive => Event::DisconnectLive,
    }
}

/// Current sidebar width.
#[must_use]
pub fn width(collapsed: bool) -> f32 {
    if collapsed {
        sizing::SIDEBAR_COLLAPSED_WIDTH
    } else {
        sizing::SIDEBAR_WIDTH
    }
}

/// Render the sidebar column.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut nav = Column::new().spacing(spacing::XXS);
    for screen in Screen::ALL {
        nav = nav.push(nav_entry(&ctx, screen));
    }

    let content = Column::new()
        .push(header(&ctx))
        .push(
            Container::new(nav)
                .padding([spacing::XS, spacing::XS])
                .height(Length::Fill),
        )
        .push(status_trigger(&ctx));

    Container::new(content)
        .width(Length::Fixed(width(ctx.collapsed)))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (glyph, tip_key) = if ctx.collapsed {
        ("»", "sidebar-expand")
    } else {
        ("«", "sidebar-collapse")
    };
    let toggle = styles::with_tooltip(
        button(Text::new(glyph).size(typography::BODY_LG))
            .on_press(Message::ToggleCollapsed)
            .padding(spacing::XS)
            .style(styles::button::ghost),
        ctx.i18n.tr(tip_key),
        tooltip::Position::Right,
    );

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center);
    if !ctx.collapsed {
        row = row.push(
            Container::new(Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
                .width(Length::Fill)
                .padding([0.0, spacing::XS]),
        );
    }
    row.push(toggle).into()
}

fn nav_entry<'a>(ctx: &ViewContext<'a>, screen: Screen) -> Element<'a, Message> {
    let label = ctx.i18n.tr(screen.title_key());
    let glyph = Container::new(Text::new(screen.glyph()).size(typography::BODY_LG))
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(Horizontal::Center);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(glyph);
    if !ctx.collapsed {
        row = row.push(Text::new(label.clone()).size(typography::BODY));
    }

    let entry = button(row)
        .on_press(Message::Navigate(screen))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::XS])
        .style(styles::button::nav_item(ctx.screen == screen));

    if ctx.collapsed {
        styles::with_tooltip(entry, label, tooltip::Position::Right)
    } else {
        entry.into()
    }
}

/// Footer showing backend and live channel state; hovering opens the card.
fn status_trigger<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status = ctx.monitor.status();
    let live_status = ctx.live.status();

    let dots = Row::new()
        .spacing(spacing::XXS)
        .push(Text::new("●").size(typography::BODY).style(move |theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).connection_color(status)),
        }))
        .push(Text::new("◆").size(typography::CAPTION).style(move |theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).live_color(live_status)),
        }));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(dots);
    if !ctx.collapsed {
        let details = Column::new()
            .push(Text::new(ctx.i18n.tr(status.i18n_key())).size(typography::BODY_SM))
            .push(
                Text::new(ctx.monitor.formatted_latency())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::of(theme).text_muted),
                    }),
            );
        row = row.push(details);
    }

    let footer = Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SIDEBAR_FOOTER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center);

    mouse_area(footer)
        .on_enter(Message::TriggerEntered)
        .on_move(Message::TriggerMoved)
        .on_exit(Message::TriggerLeft)
        .into()
}

/// Full-window layer holding the server info card, if it is visible.
pub fn card_layer<'a>(ctx: CardContext<'a>) -> Option<Element<'a, Message>> {
    let position = ctx.hover_card.position()?;

    let card = mouse_area(server_card(&ctx))
        .on_enter(Message::CardEntered)
        .on_exit(Message::CardLeft);

    Some(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: sizing::SIDEBAR_FOOTER_HEIGHT,
                left: position.x.max(spacing::XS),
            })
            .into(),
    )
}

fn server_card<'a>(ctx: &CardContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let monitor = ctx.monitor;
    let live = ctx.live;

    let mut rows = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("server-card-title")).size(typography::TITLE_SM))
        .push(info_row(i18n.tr("server-card-url"), ctx.backend_url.to_string()))
        .push(info_row(
            i18n.tr("server-card-status"),
            i18n.tr(monitor.status().i18n_key()),
        ))
        .push(info_row(i18n.tr("server-card-latency"), monitor.formatted_latency()))
        .push(info_row(
            i18n.tr("server-card-interval"),
            i18n.tr_with_args(
                "server-card-interval-value",
                &[("seconds", &monitor.interval().as_secs().to_string())],
            ),
        ))
        .push(info_row(
            i18n.tr("server-card-live"),
            i18n.tr(live.status().i18n_key()),
        ));

    if let Some(message) = live.last_message() {
        rows = rows.push(info_row(i18n.tr("server-card-live-last"), message.to_string()));
    }
    if let Some(error) = live.last_error() {
        rows = rows.push(info_row(i18n.tr("server-card-live-error"), error.to_string()));
    }

    let live_button = if live.is_active() {
        button(Text::new(i18n.tr("live-disconnect")).size(typography::BODY_SM))
            .on_press(Message::DisconnectLive)
            .style(styles::button::ghost)
    } else {
        button(Text::new(i18n.tr("live-connect")).size(typography::BODY_SM))
            .on_press(Message::ConnectLive)
            .style(styles::button::primary)
    };
    rows = rows.push(live_button.padding([spacing::XXS, spacing::SM]));

    Container::new(rows)
        .width(Length::Fixed(sizing::HOVER_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::hover_card)
        .into()
}

fn info_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_muted),
                }),
        )
        .push(Text::new(value).size(typography::BODY_SM))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn card() -> HoverCard {
        HoverCard::with_delays(Duration::from_millis(700), Duration::from_millis(300))
    }

    #[test]
    fn navigation_is_forwarded() {
        let mut hover = card();
        let event = update(Message::Navigate(Screen::Volumes), &mut hover, Instant::now());
        assert_eq!(event, Event::Navigate(Screen::Volumes));
    }

    #[test]
    fn hover_messages_drive_the_card() {
        let now = Instant::now();
        let mut hover = card();
        assert_eq!(update(Message::TriggerMoved(Point::new(30.0, 8.0)), &mut hover, now), Event::None);
        assert_eq!(update(Message::TriggerEntered, &mut hover, now), Event::None);

        hover.tick(now + Duration::from_millis(700));
        assert_eq!(hover.position(), Some(Point::new(30.0, 8.0)));

        update(Message::TriggerLeft, &mut hover, now + Duration::from_millis(800));
        update(Message::CardEntered, &mut hover, now + Duration::from_millis(850));
        hover.tick(now + Duration::from_millis(2000));
        assert!(hover.is_visible());
    }

    #[test]
    fn collapsing_closes_the_card() {
        let now = Instant::now();
        let mut hover = card();
        update(Message::TriggerEntered, &mut hover, now);
        hover.tick(now + Duration::from_millis(700));

        let event = update(Message::ToggleCollapsed, &mut hover, now);
        assert_eq!(event, Event::ToggleCollapsed);
        assert!(!hover.is_visible());
    }

    #[test]
    fn width_follows_collapsed_flag() {
        assert_eq!(width(false), sizing::SIDEBAR_WIDTH);
        assert_eq!(width(true), sizing::SIDEBAR_COLLAPSED_WIDTH);
    }

    #[test]
    fn card_layer_only_renders_when_visible() {
        let now = Instant::now();
        let i18n = I18n::default();
        let monitor = Monitor::new();
        let live = LiveChannel::new("http://localhost:33330");
        let mut hover = card();

        let hidden = card_layer(CardContext {
            i18n: &i18n,
            backend_url: "http://localhost:33330",
            monitor: &monitor,
            live: &live,
            hover_card: &hover,
        });
        assert!(hidden.is_none());
        drop(hidden);

        hover.trigger_entered(now);
        hover.tick(now + Duration::from_millis(700));
        let shown = card_layer(CardContext {
            i18n: &i18n,
            backend_url: "http://localhost:33330",
            monitor: &monitor,
            live: &live,
            hover_card: &hover,
        });
        assert!(shown.is_some());
    }
}
