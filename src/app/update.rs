// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each component reports what happened through its own `Event` or
//! `Message`; the handlers here apply the consequences to the shared state
//! and return the follow-up tasks.

use super::{App, Message, Screen};
use crate::api::VolumeListing;
use crate::error::Error;
use crate::ui::notifications::Notification;
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::{activity, connectivity_banner, insights, topbar, volumes};
use iced::Task;
use std::time::Instant;

impl App {
    /// Advances every pending deadline to `now`.
    pub(super) fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.now = now;
        self.notifications.tick(now);
        self.hover_card.tick(now);
        let ticket = self.monitor.tick(now);
        self.probe_task(ticket)
    }

    pub(super) fn handle_sidebar_message(
        &mut self,
        message: sidebar::Message,
        now: Instant,
    ) -> Task<Message> {
        match sidebar::update(message, &mut self.hover_card, now) {
            SidebarEvent::None => Task::none(),
            SidebarEvent::Navigate(screen) => self.navigate(screen),
            SidebarEvent::ToggleCollapsed => {
                let collapsed = self.sidebar.toggle();
                tracing::debug!(collapsed, "sidebar toggled");
                Task::none()
            }
            SidebarEvent::ConnectLive => {
                self.live.connect();
                Task::none()
            }
            SidebarEvent::DisconnectLive => {
                self.live.disconnect();
                Task::none()
            }
        }
    }

    pub(super) fn handle_topbar_message(&mut self, message: topbar::Message) -> Task<Message> {
        match message {
            topbar::Message::CycleTheme => {
                self.theme.cycle();
            }
            topbar::Message::ToggleLanguage => {
                let language = self.language.toggle();
                self.i18n.set_locale(language);
                tracing::info!(?language, "language switched");
            }
        }
        Task::none()
    }

    pub(super) fn handle_banner_message(
        &mut self,
        message: connectivity_banner::Message,
        now: Instant,
    ) -> Task<Message> {
        match message {
            connectivity_banner::Message::Retry => {
                let ticket = self.monitor.trigger_manual_retry(now);
                self.probe_task(ticket)
            }
        }
    }

    pub(super) fn handle_insights_message(&mut self, message: insights::Message) -> Task<Message> {
        match message {
            insights::Message::OpenVolumes => self.navigate(Screen::Volumes),
            insights::Message::OpenActivity => self.navigate(Screen::Activity),
        }
    }

    pub(super) fn handle_volumes_message(&mut self, message: volumes::Message) -> Task<Message> {
        match message {
            volumes::Message::Refresh => self.fetch_volumes(),
        }
    }

    pub(super) fn handle_activity_message(&mut self, message: activity::Message) -> Task<Message> {
        match message {
            activity::Message::Connect => self.live.connect(),
            activity::Message::Disconnect => self.live.disconnect(),
        }
        Task::none()
    }

    /// Stores a volume listing result.
    ///
    /// Failures are shown inline on the volumes screen; anywhere else they
    /// raise a toast.
    pub(super) fn handle_volumes_fetched(
        &mut self,
        result: Result<VolumeListing, Error>,
        now: Instant,
    ) -> Task<Message> {
        if let Err(error) = &result {
            if self.screen != Screen::Volumes {
                self.notifications.push(
                    Notification::error("notification-volumes-error")
                        .with_arg("error", error.to_string()),
                    now,
                );
            }
        }
        self.volumes.finish_fetch(result);
        Task::none()
    }

    /// Switches screens. Entering the volumes screen refreshes the listing.
    pub(super) fn navigate(&mut self, screen: Screen) -> Task<Message> {
        if self.screen == screen {
            return Task::none();
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;
        match screen {
            Screen::Volumes => self.fetch_volumes(),
            Screen::Insights | Screen::Collections | Screen::Activity => Task::none(),
        }
    }
}
