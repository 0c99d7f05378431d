// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps active notifications in insertion order, which is
//! also display order. Each one counts down independently; hovering a toast
//! pauses its countdown and leaving resumes it with the time that was left.

use super::notification::{
    ActiveNotification, DismissCallback, DismissKind, Notification, NotificationId, Severity,
};
use std::time::{Duration, Instant};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss button pressed.
    Dismiss(NotificationId),
    /// Pointer entered a toast.
    HoverEnter(NotificationId),
    /// Pointer left a toast.
    HoverExit(NotificationId),
}

/// Manages the active notifications.
#[derive(Debug, Default)]
pub struct Manager {
    active: Vec<ActiveNotification>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification and starts its countdown.
    ///
    /// `duration` of `None` uses the default, `Some(Duration::ZERO)` keeps
    /// the notification until the user dismisses it.
    pub fn add(
        &mut self,
        message_key: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
        on_manual_dismiss: Option<DismissCallback>,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(severity, message_key)
            .with_duration(duration)
            .with_callback(on_manual_dismiss);
        self.push(notification, now)
    }

    /// Pushes a built notification. It is appended after the existing ones.
    pub fn push(&mut self, notification: Notification, now: Instant) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        match notification.severity() {
            Severity::Error => {
                tracing::error!(id = id.0, key = notification.message_key(), "notification");
            }
            Severity::Warning => {
                tracing::warn!(id = id.0, key = notification.message_key(), "notification");
            }
            Severity::Info | Severity::Success => {
                tracing::debug!(id = id.0, key = notification.message_key(), "notification");
            }
        }

        self.active.push(notification.activate(id, now));
        id
    }

    /// Removes a notification.
    ///
    /// The manual-dismiss callback runs after removal, once, and only for
    /// [`DismissKind::Manual`]. Returns `false` for unknown ids.
    pub fn dismiss(&mut self, id: NotificationId, kind: DismissKind) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let mut removed = self.active.remove(pos);
        tracing::debug!(id = id.0, ?kind, "notification dismissed");

        if kind == DismissKind::Manual {
            if let Some(callback) = removed.take_callback() {
                callback.call();
            }
        }
        true
    }

    /// Stops the countdown of `id`. No effect on permanent or paused ones.
    pub fn pause(&mut self, id: NotificationId, now: Instant) {
        if let Some(notification) = self.get_mut(id) {
            notification.pause(now);
        }
    }

    /// Restarts the countdown of `id`, dismissing it when no time is left.
    pub fn resume(&mut self, id: NotificationId, now: Instant) {
        let expired = self
            .get_mut(id)
            .is_some_and(|notification| !notification.resume(now));
        if expired {
            self.dismiss(id, DismissKind::Automatic);
        }
    }

    /// Dismisses every notification whose countdown has run out.
    ///
    /// Returns the number of notifications removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let expired: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|n| n.deadline().is_some_and(|deadline| deadline <= now))
            .map(ActiveNotification::id)
            .collect();

        for id in &expired {
            self.dismiss(*id, DismissKind::Automatic);
        }
        expired.len()
    }

    /// Handles a message from the toast overlay.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, DismissKind::Manual);
            }
            Message::HoverEnter(id) => self.pause(*id, now),
            Message::HoverExit(id) => self.resume(*id, now),
        }
    }

    /// Earliest pending auto-dismiss, if any countdown is running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().filter_map(ActiveNotification::deadline).min()
    }

    /// Notifications in display order.
    pub fn visible(&self) -> impl Iterator<Item = &ActiveNotification> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&ActiveNotification> {
        self.active.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.is_empty()
    }

    /// Drops every notification without running callbacks.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.active.iter().position(|n| n.id() == id)
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut ActiveNotification> {
        self.active.iter_mut().find(|n| n.id() == id)
    }
}
