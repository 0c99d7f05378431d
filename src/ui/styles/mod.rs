// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.

pub mod button;
pub mod container;

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{tooltip, Container, Text};
use iced::Element;

/// Wraps `content` in a tooltip using the dashboard tooltip style.
pub fn with_tooltip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let tip = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(container::tooltip);

    tooltip(content, tip, position).gap(spacing::XS).into()
}
