// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear in the bottom-right corner, in the order they were
//! added, and disappear on their own after their duration unless they are
//! permanent. Hovering a toast pauses its countdown; leaving resumes it
//! with the time that was left.
//!
//! # Components
//!
//! - [`notification`] - `Notification` builder, severity and dismiss callback
//! - [`manager`] - `Manager` owning active notifications and their countdowns
//! - [`toast`] - toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-connection-restored"), now);
//!
//! // In update, on every tick:
//! manager.tick(now);
//!
//! // In view:
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    ActiveNotification, DismissCallback, DismissKind, Notification, NotificationId, Severity,
};
pub use toast::Toast;
