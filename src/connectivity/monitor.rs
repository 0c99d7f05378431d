// SPDX-License-Identifier: MPL-2.0
//! Backend connectivity state machine.
//!
//! The monitor never performs I/O itself. It hands out [`ProbeTicket`]s
//! when a probe is due; the caller runs [`probe::run`](super::probe::run)
//! and reports the outcome back through [`Monitor::finish_probe`]. All
//! delays are deadlines compared against the `now` passed in by the caller.

use super::latency::Latency;
use super::probe::{ProbeOutcome, ProbeTicket};
use crate::config::defaults::{
    CONNECTED_POLL_INTERVAL_MS, MANUAL_RETRY_GRACE_MS, MAX_BACKOFF_EXPONENT,
    OFFLINE_BASE_INTERVAL_MS, RETRY_FAILURE_ICON_MS, RETRY_SHAKE_MS,
};
use crate::ui::notifications::{Manager, Notification};
use chrono::Utc;
use std::time::{Duration, Instant};

pub const CONNECTION_LOST_KEY: &str = "notification-connection-lost";
pub const CONNECTION_RESTORED_KEY: &str = "notification-connection-restored";

/// Reachability of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl Status {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Status::Unknown => "connection-status-unknown",
            Status::Connected => "connection-status-connected",
            Status::Disconnected => "connection-status-disconnected",
        }
    }
}

/// Visual state of the manual retry control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryIndicator {
    #[default]
    Idle,
    /// Retry requested; reported as failed if still offline at `grace_deadline`.
    InFlight { grace_deadline: Instant },
    /// Shake animation after a failed retry.
    Shaking { until: Instant },
    /// Failure icon shown after the shake.
    FailureIcon { until: Instant },
}

impl RetryIndicator {
    #[must_use]
    pub fn is_spinning(self) -> bool {
        matches!(self, RetryIndicator::InFlight { .. })
    }

    #[must_use]
    pub fn is_shaking(self) -> bool {
        matches!(self, RetryIndicator::Shaking { .. })
    }

    /// Failure feedback is visible (shake or icon).
    #[must_use]
    pub fn shows_failure(self) -> bool {
        matches!(
            self,
            RetryIndicator::Shaking { .. } | RetryIndicator::FailureIcon { .. }
        )
    }

    fn deadline(self) -> Option<Instant> {
        match self {
            RetryIndicator::Idle => None,
            RetryIndicator::InFlight { grace_deadline } => Some(grace_deadline),
            RetryIndicator::Shaking { until } | RetryIndicator::FailureIcon { until } => {
                Some(until)
            }
        }
    }
}

/// Poll interval after `offline_for` of continuous failures.
///
/// `5000 ms * 2^min(minutes, 6)`, so the interval doubles every full
/// minute offline and caps at 320 s.
#[must_use]
pub fn offline_interval(offline_for: Duration) -> Duration {
    let minutes = offline_for.as_secs() / 60;
    let exponent = u32::try_from(minutes)
        .unwrap_or(MAX_BACKOFF_EXPONENT)
        .min(MAX_BACKOFF_EXPONENT);
    Duration::from_millis(OFFLINE_BASE_INTERVAL_MS * (1_u64 << exponent))
}

/// Health-check scheduler and connection state.
#[derive(Debug, Clone)]
pub struct Monitor {
    status: Status,
    latency: Latency,
    offline_since: Option<Instant>,
    interval: Duration,
    ever_connected: bool,
    next_probe_at: Option<Instant>,
    in_flight: Option<u64>,
    next_ticket: u64,
    retry: RetryIndicator,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: Status::Unknown,
            latency: Latency::Unset,
            offline_since: None,
            interval: Duration::from_millis(CONNECTED_POLL_INTERVAL_MS),
            ever_connected: false,
            next_probe_at: None,
            in_flight: None,
            next_ticket: 0,
            retry: RetryIndicator::Idle,
        }
    }

    /// Starts a probe right away, cancelling the scheduled one.
    ///
    /// Returns `None` while another probe is still in flight.
    pub fn check_now(&mut self, now: Instant) -> Option<ProbeTicket> {
        if self.in_flight.is_some() {
            tracing::trace!("probe already in flight");
            return None;
        }
        self.next_probe_at = None;
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        tracing::trace!(ticket = self.next_ticket, ?now, "probe started");
        Some(ProbeTicket::new(self.next_ticket, Utc::now()))
    }

    /// Applies a probe result and schedules the next probe.
    ///
    /// Results of superseded probes are still applied.
    pub fn finish_probe(
        &mut self,
        ticket: &ProbeTicket,
        outcome: ProbeOutcome,
        now: Instant,
        notifications: &mut Manager,
    ) {
        if self.in_flight == Some(ticket.id) {
            self.in_flight = None;
        }

        let previous = self.status;
        match outcome {
            ProbeOutcome::Healthy { latency } => {
                self.status = Status::Connected;
                self.latency = latency;
                self.interval = Duration::from_millis(CONNECTED_POLL_INTERVAL_MS);
                self.offline_since = None;
                self.retry = RetryIndicator::Idle;

                if previous == Status::Disconnected {
                    tracing::info!(latency = %self.latency, "backend reachable again");
                    notifications.push(Notification::success(CONNECTION_RESTORED_KEY), now);
                } else if previous == Status::Unknown {
                    tracing::info!(latency = %self.latency, "backend reachable");
                }
                self.ever_connected = true;
            }
            ProbeOutcome::Failed { reason } => {
                self.status = Status::Disconnected;
                self.latency = Latency::Unset;
                let since = *self.offline_since.get_or_insert(now);
                self.interval = offline_interval(now.saturating_duration_since(since));

                if previous == Status::Connected && self.ever_connected {
                    tracing::warn!(%reason, "backend connection lost");
                    notifications.push(Notification::error(CONNECTION_LOST_KEY), now);
                } else {
                    tracing::debug!(%reason, interval_ms = self.interval.as_millis(), "backend unreachable");
                }
            }
        }

        if self.in_flight.is_none() {
            self.next_probe_at = Some(now + self.interval);
        }
    }

    /// Starts a user-requested probe and arms the retry feedback.
    ///
    /// Ignored while a retry is pending or its failure feedback is showing.
    pub fn trigger_manual_retry(&mut self, now: Instant) -> Option<ProbeTicket> {
        if self.retry != RetryIndicator::Idle {
            tracing::debug!(state = ?self.retry, "manual retry ignored");
            return None;
        }
        tracing::info!("manual connectivity retry");
        self.retry = RetryIndicator::InFlight {
            grace_deadline: now + Duration::from_millis(MANUAL_RETRY_GRACE_MS),
        };
        self.next_probe_at = None;
        self.check_now(now)
    }

    /// Advances retry feedback and fires the scheduled probe when due.
    pub fn tick(&mut self, now: Instant) -> Option<ProbeTicket> {
        self.advance_retry(now);

        match self.next_probe_at {
            Some(at) if at <= now => {
                self.next_probe_at = None;
                self.check_now(now)
            }
            _ => None,
        }
    }

    fn advance_retry(&mut self, now: Instant) {
        loop {
            let next = match self.retry {
                RetryIndicator::InFlight { grace_deadline } if grace_deadline <= now => {
                    if self.is_connected() {
                        RetryIndicator::Idle
                    } else {
                        tracing::debug!("manual retry still offline after grace period");
                        RetryIndicator::Shaking {
                            until: grace_deadline + Duration::from_millis(RETRY_SHAKE_MS),
                        }
                    }
                }
                RetryIndicator::Shaking { until } if until <= now => RetryIndicator::FailureIcon {
                    until: until + Duration::from_millis(RETRY_FAILURE_ICON_MS),
                },
                RetryIndicator::FailureIcon { until } if until <= now => RetryIndicator::Idle,
                _ => break,
            };
            self.retry = next;
        }
    }

    /// Earliest instant at which [`tick`](Self::tick) has something to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.next_probe_at, self.retry.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == Status::Connected
    }

    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency
    }

    #[must_use]
    pub fn formatted_latency(&self) -> String {
        self.latency.formatted()
    }

    /// Current poll interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn retry_indicator(&self) -> RetryIndicator {
        self.retry
    }

    #[must_use]
    pub fn ever_connected(&self) -> bool {
        self.ever_connected
    }

    #[must_use]
    pub fn offline_since(&self) -> Option<Instant> {
        self.offline_since
    }

    #[must_use]
    pub fn next_probe_at(&self) -> Option<Instant> {
        self.next_probe_at
    }

    #[must_use]
    pub fn is_probing(&self) -> bool {
        self.in_flight.is_some()
    }
}
