// SPDX-License-Identifier: MPL-2.0
//! Client compatibility notices.
//!
//! On startup the backend is asked which user agent it sees. Mainstream
//! engines and this dashboard's own agent are considered supported; Firefox
//! gets a one-off informational notice and anything else a warning. Either
//! notice stops appearing once the user dismisses it by hand.

use crate::api::client_user_agent;
use crate::config::defaults::{DEFAULT_NOTIFICATION_DURATION_MS, UA_LOOKUP_FAILED_DURATION_MS};
use crate::error::Result;
use crate::storage::Storage;
use crate::ui::notifications::{Manager, Notification};
use std::time::{Duration, Instant};

pub const UNSUPPORTED_DISMISSED_KEY: &str = "dismissedUnsupportedBrowserWarning";
pub const FIREFOX_DISMISSED_KEY: &str = "dismissedFirefoxAnimationWarning";

pub const UNSUPPORTED_CLIENT_NOTICE: &str = "notification-unsupported-client";
pub const FIREFOX_NOTICE: &str = "notification-firefox-animations";
pub const UA_LOOKUP_FAILED_NOTICE: &str = "notification-ua-lookup-failed";

/// Client family derived from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Chrome,
    Edge,
    Safari,
    Firefox,
    /// This application's own HTTP client.
    Dashboard,
    Other,
}

impl ClientKind {
    #[must_use]
    pub fn is_generally_supported(self) -> bool {
        matches!(
            self,
            ClientKind::Chrome | ClientKind::Edge | ClientKind::Safari | ClientKind::Dashboard
        )
    }
}

/// Classifies a user-agent string, case-insensitively.
#[must_use]
pub fn classify(user_agent: &str) -> ClientKind {
    let ua = user_agent.to_ascii_lowercase();
    let has = |needle: &str| ua.contains(needle);

    if ua.starts_with(&format!("{}/", crate::app::paths::APP_NAME)) {
        return ClientKind::Dashboard;
    }

    let is_edge = has("edg/") || has("edge/");
    let is_opera = has("opr/");
    let is_chromium = has("chrome/") || has("crios/");

    if is_edge {
        ClientKind::Edge
    } else if is_chromium && !is_opera {
        ClientKind::Chrome
    } else if has("firefox/") || has("fxios/") {
        ClientKind::Firefox
    } else if has("safari/") && !is_chromium && !is_opera {
        ClientKind::Safari
    } else {
        ClientKind::Other
    }
}

/// Shows the notices matching the user agent reported by the backend.
///
/// `lookup` is the result of the user-agent request: a failed request falls
/// back to the local agent and shows a short warning, a response without an
/// agent falls back silently. Returns the classification, or `None` when
/// no agent is known at all.
pub fn announce(
    lookup: Result<Option<String>>,
    storage: &Storage,
    notifications: &mut Manager,
    now: Instant,
) -> Option<ClientKind> {
    let user_agent = match lookup {
        Ok(Some(agent)) => agent,
        Ok(None) => client_user_agent(),
        Err(error) => {
            tracing::warn!(%error, "user agent lookup failed");
            notifications.push(
                Notification::warning(UA_LOOKUP_FAILED_NOTICE)
                    .auto_dismiss(Duration::from_millis(UA_LOOKUP_FAILED_DURATION_MS)),
                now,
            );
            client_user_agent()
        }
    };

    if user_agent.trim().is_empty() {
        return None;
    }

    let kind = classify(&user_agent);
    tracing::debug!(?kind, %user_agent, "client classified");

    let duration = Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS);
    let dismissed = |key: &str| storage.get::<bool>(key).unwrap_or(false);

    if kind == ClientKind::Firefox {
        if !dismissed(FIREFOX_DISMISSED_KEY) {
            notifications.push(
                Notification::info(FIREFOX_NOTICE)
                    .auto_dismiss(duration)
                    .on_manual_dismiss(remember_dismissal(storage, FIREFOX_DISMISSED_KEY)),
                now,
            );
        }
    } else if !kind.is_generally_supported() && !dismissed(UNSUPPORTED_DISMISSED_KEY) {
        notifications.push(
            Notification::warning(UNSUPPORTED_CLIENT_NOTICE)
                .auto_dismiss(duration)
                .on_manual_dismiss(remember_dismissal(storage, UNSUPPORTED_DISMISSED_KEY)),
            now,
        );
    }

    Some(kind)
}

fn remember_dismissal(storage: &Storage, key: &'static str) -> impl FnOnce() + Send + 'static {
    let storage = storage.clone();
    move || storage.set(key, &true)
}
