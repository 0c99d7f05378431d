// SPDX-License-Identifier: MPL-2.0
//! Persistent "backend unreachable" banner with the manual retry control.
//!
//! The banner is only rendered while the monitor reports the backend as
//! disconnected. The retry button reflects [`RetryIndicator`]: a spinner
//! while the retry is pending, a short shake when it failed, then a failure
//! icon before it becomes clickable again.

use crate::config::{RETRY_SHAKE_MS, TICK_INTERVAL_MS};
use crate::connectivity::{Monitor, RetryIndicator, Status};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length, Padding};
use std::time::{Duration, Instant};

/// Horizontal amplitude of the shake, in logical pixels.
const SHAKE_AMPLITUDE: f32 = 4.0;

/// Length of one shake step, one per tick.
const SHAKE_STEP_MS: u128 = TICK_INTERVAL_MS as u128;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub monitor: &'a Monitor,
    /// Time of the last tick, for the shake animation.
    pub now: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Retry,
}

/// Horizontal offset of the retry button at `now`.
///
/// Alternates left and right every step while the indicator is shaking and
/// is zero otherwise.
#[must_use]
pub fn shake_offset(indicator: RetryIndicator, now: Instant) -> f32 {
    let RetryIndicator::Shaking { until } = indicator else {
        return 0.0;
    };
    let started = until
        .checked_sub(Duration::from_millis(RETRY_SHAKE_MS))
        .unwrap_or(until);
    let step = now.saturating_duration_since(started).as_millis() / SHAKE_STEP_MS;
    if step % 2 == 0 {
        SHAKE_AMPLITUDE
    } else {
        -SHAKE_AMPLITUDE
    }
}

/// Render the banner, or nothing while the backend is reachable.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.monitor.status() != Status::Disconnected {
        return None;
    }
    let i18n = ctx.i18n;
    let indicator = ctx.monitor.retry_indicator();

    let text = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("banner-offline-title")).size(typography::BODY_LG))
        .push(
            Text::new(i18n.tr_with_args(
                "banner-offline-detail",
                &[("seconds", &ctx.monitor.interval().as_secs().to_string())],
            ))
            .size(typography::BODY_SM),
        );

    let (glyph, label_key) = match indicator {
        RetryIndicator::Idle | RetryIndicator::Shaking { .. } => ("↻", "banner-retry"),
        RetryIndicator::InFlight { .. } => ("⟳", "banner-retrying"),
        RetryIndicator::FailureIcon { .. } => ("✕", "banner-retry-failed"),
    };
    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(typography::BODY))
        .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM));

    let mut retry = button(label)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::retry(indicator));
    if indicator == RetryIndicator::Idle {
        retry = retry.on_press(Message::Retry);
    }

    // Shifting the left padding moves the button without affecting the row.
    let offset = shake_offset(indicator, ctx.now);
    let retry = Container::new(retry).padding(Padding {
        top: 0.0,
        bottom: 0.0,
        left: SHAKE_AMPLITUDE + offset,
        right: SHAKE_AMPLITUDE - offset,
    });

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new("⚠").size(typography::TITLE_SM))
        .push(text)
        .push(retry);

    Some(
        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .style(styles::container::offline_banner)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ProbeOutcome;
    use crate::ui::notifications::Manager;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn no_shake_outside_the_shaking_phase() {
        let now = Instant::now();
        assert_eq!(shake_offset(RetryIndicator::Idle, now), 0.0);
        assert_eq!(
            shake_offset(RetryIndicator::FailureIcon { until: now }, now),
            0.0
        );
    }

    #[test]
    fn shake_alternates_direction() {
        let start = Instant::now();
        let indicator = RetryIndicator::Shaking {
            until: start + ms(RETRY_SHAKE_MS),
        };
        let first = shake_offset(indicator, start + ms(10));
        let second = shake_offset(indicator, start + ms(TICK_INTERVAL_MS + 10));
        assert_eq!(first, SHAKE_AMPLITUDE);
        assert_eq!(second, -SHAKE_AMPLITUDE);
    }

    #[test]
    fn banner_only_shows_while_disconnected() {
        let now = Instant::now();
        let i18n = I18n::default();
        let mut notifications = Manager::new();
        let mut monitor = Monitor::new();

        let hidden = view(ViewContext {
            i18n: &i18n,
            monitor: &monitor,
            now,
        });
        assert!(hidden.is_none());
        drop(hidden);

        let ticket = monitor.check_now(now).expect("first probe");
        monitor.finish_probe(
            &ticket,
            ProbeOutcome::Failed {
                reason: "refused".into(),
            },
            now,
            &mut notifications,
        );
        let shown = view(ViewContext {
            i18n: &i18n,
            monitor: &monitor,
            now,
        });
        assert!(shown.is_some());
    }
}
