// SPDX-License-Identifier: MPL-2.0
//! View rendering logic for the application.
//!
//! The window is split into the sidebar and the main column (top bar,
//! offline banner, current screen). The server info card and the toasts are
//! stacked above everything.

use super::{Message, Screen};
use crate::api::LiveChannel;
use crate::connectivity::Monitor;
use crate::i18n::fluent::I18n;
use crate::preferences::{Language, ThemeMode};
use crate::ui::notifications::{self, Toast};
use crate::ui::sidebar::{self, HoverCard};
use crate::ui::styles;
use crate::ui::{activity, collections, connectivity_banner, insights, topbar, volumes};
use iced::widget::{Column, Container, Row, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub backend_url: &'a str,
    pub theme_mode: ThemeMode,
    pub language: Language,
    pub sidebar_collapsed: bool,
    pub hover_card: &'a HoverCard,
    pub notifications: &'a notifications::Manager,
    pub monitor: &'a Monitor,
    pub volumes: &'a volumes::State,
    pub live: &'a LiveChannel,
    pub now: Instant,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sidebar_view = sidebar::view(sidebar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        collapsed: ctx.sidebar_collapsed,
        monitor: ctx.monitor,
        live: ctx.live,
    })
    .map(Message::Sidebar);

    let topbar_view = topbar::view(topbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        theme_mode: ctx.theme_mode,
        language: ctx.language,
    })
    .map(Message::Topbar);

    let mut main = Column::new().push(topbar_view);
    if let Some(banner) = connectivity_banner::view(connectivity_banner::ViewContext {
        i18n: ctx.i18n,
        monitor: ctx.monitor,
        now: ctx.now,
    }) {
        main = main.push(banner.map(Message::Banner));
    }
    main = main.push(
        Container::new(view_screen(&ctx))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::content),
    );

    let layout = Row::new()
        .push(sidebar_view)
        .push(main.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .push(layout)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(card) = sidebar::card_layer(sidebar::CardContext {
        i18n: ctx.i18n,
        backend_url: ctx.backend_url,
        monitor: ctx.monitor,
        live: ctx.live,
        hover_card: ctx.hover_card,
    }) {
        stack = stack.push(card.map(Message::Sidebar));
    }

    if ctx.notifications.has_notifications() {
        stack = stack.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    stack.into()
}

fn view_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::Insights => insights::view(insights::ViewContext {
            i18n: ctx.i18n,
            backend_url: ctx.backend_url,
            monitor: ctx.monitor,
            volumes: ctx.volumes,
            live: ctx.live,
        })
        .map(Message::Insights),
        Screen::Volumes => volumes::view(volumes::ViewContext {
            i18n: ctx.i18n,
            state: ctx.volumes,
        })
        .map(Message::Volumes),
        Screen::Collections => collections::view(ctx.i18n),
        Screen::Activity => activity::view(activity::ViewContext {
            i18n: ctx.i18n,
            live: ctx.live,
        })
        .map(Message::Activity),
    }
}
