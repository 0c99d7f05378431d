// SPDX-License-Identifier: MPL-2.0
//! Time-based and socket subscriptions for the application.

use super::Message;
use crate::api::LiveChannel;
use crate::config::{SYSTEM_THEME_POLL_SECS, TICK_INTERVAL_MS};
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick driving notification countdowns, the hover
/// card delays and the health-check schedule.
///
/// Only active while some deadline is pending.
pub fn create_tick_subscription(has_pending_deadline: bool) -> Subscription<Message> {
    if has_pending_deadline {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Polls the OS color scheme so the `system` theme mode follows it.
pub fn create_system_theme_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(SYSTEM_THEME_POLL_SECS)).map(|_| Message::PollSystemTheme)
}

/// Forwards live channel events while the socket is wanted.
pub fn create_live_subscription(live: &LiveChannel) -> Subscription<Message> {
    live.subscription().map(Message::Live)
}
