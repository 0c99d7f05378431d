// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is the request built by callers. Once pushed into the
//! [`Manager`](super::Manager) it becomes an [`ActiveNotification`] with an
//! identifier and a countdown.

use crate::config::defaults::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification, assigned by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(super) u64);

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown in front of the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Error => "×",
        }
    }
}

/// How a notification left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissKind {
    /// The user pressed the dismiss button.
    Manual,
    /// The countdown ran out.
    Automatic,
}

/// Action run once when the user dismisses a notification by hand.
pub struct DismissCallback(Box<dyn FnOnce() + Send>);

impl DismissCallback {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self(Box::new(action))
    }

    pub(super) fn call(self) {
        (self.0)();
    }
}

impl fmt::Debug for DismissCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DismissCallback(..)")
    }
}

/// A notification to be displayed to the user.
#[derive(Debug)]
pub struct Notification {
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    message_args: Vec<(String, String)>,
    /// `None` uses the default duration, `Some(ZERO)` never expires.
    duration: Option<Duration>,
    on_manual_dismiss: Option<DismissCallback>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` is resolved through i18n at render time, so a
    /// language switch re-translates notifications already on screen.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            duration: None,
            on_manual_dismiss: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Sets the auto-dismiss duration. [`Duration::ZERO`] makes it permanent.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the notification until the user dismisses it.
    #[must_use]
    pub fn permanent(self) -> Self {
        self.auto_dismiss(Duration::ZERO)
    }

    /// Registers an action run only on manual dismissal.
    #[must_use]
    pub fn on_manual_dismiss(mut self, action: impl FnOnce() + Send + 'static) -> Self {
        self.on_manual_dismiss = Some(DismissCallback::new(action));
        self
    }

    pub(super) fn with_callback(mut self, callback: Option<DismissCallback>) -> Self {
        self.on_manual_dismiss = callback;
        self
    }

    pub(super) fn with_duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Effective duration, with the default applied.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
            .unwrap_or(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS))
    }

    pub(super) fn activate(self, id: NotificationId, now: Instant) -> ActiveNotification {
        let duration = self.duration();
        let countdown = if duration.is_zero() {
            Countdown::Permanent
        } else {
            Countdown::Running {
                started_at: now,
                deadline: now + duration,
            }
        };

        ActiveNotification {
            id,
            severity: self.severity,
            message_key: self.message_key,
            message_args: self.message_args,
            duration,
            remaining: duration,
            countdown,
            on_manual_dismiss: self.on_manual_dismiss,
        }
    }
}

/// Auto-dismiss timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Countdown {
    Permanent,
    Running { started_at: Instant, deadline: Instant },
    Paused,
}

/// A notification currently in the manager's list.
#[derive(Debug)]
pub struct ActiveNotification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    duration: Duration,
    /// Time left as of the last pause; equals `duration` until then.
    remaining: Duration,
    countdown: Countdown,
    on_manual_dismiss: Option<DismissCallback>,
}

impl ActiveNotification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.countdown == Countdown::Permanent
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.countdown == Countdown::Paused
    }

    /// Time left before auto-dismiss, or `None` for permanent notifications.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.countdown {
            Countdown::Permanent => None,
            Countdown::Paused => Some(self.remaining),
            Countdown::Running { deadline, .. } => Some(deadline.saturating_duration_since(now)),
        }
    }

    pub(super) fn deadline(&self) -> Option<Instant> {
        match self.countdown {
            Countdown::Running { deadline, .. } => Some(deadline),
            Countdown::Permanent | Countdown::Paused => None,
        }
    }

    /// Stops the countdown, keeping the time left.
    pub(super) fn pause(&mut self, now: Instant) {
        if let Countdown::Running { started_at, .. } = self.countdown {
            let elapsed = now.saturating_duration_since(started_at);
            self.remaining = self.remaining.saturating_sub(elapsed);
            self.countdown = Countdown::Paused;
        }
    }

    /// Restarts a paused countdown. Returns `false` when no time is left.
    pub(super) fn resume(&mut self, now: Instant) -> bool {
        if self.countdown != Countdown::Paused {
            return true;
        }
        if self.remaining.is_zero() {
            return false;
        }
        self.countdown = Countdown::Running {
            started_at: now,
            deadline: now + self.remaining,
        };
        true
    }

    pub(super) fn take_callback(&mut self) -> Option<DismissCallback> {
        self.on_manual_dismiss.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activate(notification: Notification, now: Instant) -> ActiveNotification {
        notification.activate(NotificationId(0), now)
    }

    #[test]
    fn default_duration_is_five_seconds() {
        let notification = Notification::info("test");
        assert_eq!(notification.duration(), Duration::from_millis(5000));
    }

    #[test]
    fn zero_duration_is_permanent() {
        let now = Instant::now();
        let active = activate(Notification::error("test").permanent(), now);
        assert!(active.is_permanent());
        assert_eq!(active.remaining(now), None);
        assert_eq!(active.deadline(), None);
    }

    #[test]
    fn deadline_is_start_plus_duration() {
        let now = Instant::now();
        let active = activate(
            Notification::success("test").auto_dismiss(Duration::from_millis(1500)),
            now,
        );
        assert_eq!(active.deadline(), Some(now + Duration::from_millis(1500)));
    }

    #[test]
    fn pause_keeps_remaining_time() {
        let now = Instant::now();
        let mut active = activate(Notification::info("test"), now);

        active.pause(now + Duration::from_millis(2000));
        assert!(active.is_paused());
        let later = now + Duration::from_secs(60);
        assert_eq!(active.remaining(later), Some(Duration::from_millis(3000)));

        assert!(active.resume(later));
        assert_eq!(active.deadline(), Some(later + Duration::from_millis(3000)));
    }

    #[test]
    fn resume_with_nothing_left_reports_expiry() {
        let now = Instant::now();
        let mut active = activate(
            Notification::info("test").auto_dismiss(Duration::from_millis(100)),
            now,
        );
        active.pause(now + Duration::from_millis(250));
        assert!(!active.resume(now + Duration::from_millis(300)));
    }

    #[test]
    fn pause_on_permanent_is_noop() {
        let now = Instant::now();
        let mut active = activate(Notification::warning("test").permanent(), now);
        active.pause(now);
        assert!(active.is_permanent());
    }

    #[test]
    fn with_arg_adds_arguments() {
        let now = Instant::now();
        let active = activate(
            Notification::error("notification-volumes-error").with_arg("error", "boom"),
            now,
        );
        assert_eq!(
            active.message_args(),
            &[("error".to_string(), "boom".to_string())]
        );
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Warning.color(), Severity::Info.color());
    }
}
