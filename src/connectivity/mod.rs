// SPDX-License-Identifier: MPL-2.0
//! Backend connectivity monitoring.
//!
//! The [`Monitor`] polls the backend health check, once per second while
//! it answers and with an exponential backoff while it does not. Each probe
//! measures latency by comparing the server's nanosecond timestamp with the
//! local send time. Transitions between connected and disconnected are
//! announced through the notification center, and a manual retry control
//! gives timed visual feedback.

mod latency;
mod monitor;
pub mod probe;
mod timestamp;

pub use latency::Latency;
pub use monitor::{
    offline_interval, Monitor, RetryIndicator, Status, CONNECTION_LOST_KEY,
    CONNECTION_RESTORED_KEY,
};
pub use probe::{ProbeOutcome, ProbeTicket};
pub use timestamp::parse_server_timestamp;
