// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{LiveUpdate, VolumeListing};
use crate::connectivity::{ProbeOutcome, ProbeTicket};
use crate::error::Error;
use crate::ui::{activity, connectivity_banner, insights, notifications, sidebar, topbar, volumes};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick driving every pending deadline.
    Tick(Instant),
    Notification(notifications::NotificationMessage),
    Sidebar(sidebar::Message),
    Topbar(topbar::Message),
    Banner(connectivity_banner::Message),
    Insights(insights::Message),
    Volumes(volumes::Message),
    Activity(activity::Message),
    /// A health-check probe finished.
    ProbeFinished(ProbeTicket, ProbeOutcome),
    VolumesFetched(Result<VolumeListing, Error>),
    UserAgentFetched(Result<Option<String>, Error>),
    /// Time to re-read the OS color scheme.
    PollSystemTheme,
    SystemThemeDetected(bool),
    Live(LiveUpdate),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Language used until the user picks one (`en`, `zh`).
    pub lang: Option<String>,
    /// Backend base URL, overriding `settings.toml`.
    pub backend_url: Option<String>,
    /// Optional data directory override (for `storage.json`).
    /// Takes precedence over `IPELFS_DASH_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `IPELFS_DASH_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
