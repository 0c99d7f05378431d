// SPDX-License-Identifier: MPL-2.0
//! Volumes screen: count and list of the volumes registered with the backend.

use crate::api::{Volume, VolumeListing};
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Fetch state of the volume listing.
#[derive(Debug, Clone, Default)]
pub struct State {
    loading: bool,
    listing: Option<VolumeListing>,
    error: Option<String>,
}

impl State {
    /// Marks a fetch as started, clearing the previous result.
    ///
    /// Returns `false` when a fetch is already running, in which case the
    /// caller should not issue another request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.listing = None;
        self.error = None;
        true
    }

    /// Stores the result of a fetch.
    pub fn finish_fetch(&mut self, result: Result<VolumeListing>) {
        self.loading = false;
        match result {
            Ok(listing) => {
                self.listing = Some(listing);
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "volume listing failed");
                self.listing = None;
                self.error = Some(error.to_string());
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Count reported by the backend, zero until a listing succeeded.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.listing.as_ref().map_or(0, |listing| listing.count)
    }

    #[must_use]
    pub fn volumes(&self) -> &[Volume] {
        self.listing
            .as_ref()
            .map(|listing| listing.volumes.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn has_listing(&self) -> bool {
        self.listing.is_some()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Refresh,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut refresh = button(Text::new(i18n.tr("volumes-refresh")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary);
    if !state.is_loading() {
        refresh = refresh.on_press(Message::Refresh);
    }

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(
                Text::new(i18n.tr_with_args(
                    "volumes-count",
                    &[("count", &state.count().to_string())],
                ))
                .size(typography::TITLE_SM),
            )
            .width(Length::Fill),
        )
        .push(refresh);

    let body: Element<'a, Message> = if state.is_loading() {
        muted(i18n.tr("volumes-loading"))
    } else if let Some(error) = state.error() {
        Text::new(i18n.tr_with_args("volumes-error", &[("error", error)]))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::of(theme).error),
            })
            .into()
    } else if state.volumes().is_empty() {
        muted(i18n.tr("volumes-empty"))
    } else {
        let rows = state.volumes().iter().map(volume_row);
        scrollable(Column::with_children(rows).spacing(spacing::XS))
            .height(Length::Fill)
            .into()
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(body)
        .into()
}

fn volume_row<'a>(volume: &'a Volume) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(volume.path.as_str()).size(typography::BODY))
        .push(
            Text::new(volume.id.as_str())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_muted),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn muted<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::of(theme).text_muted),
        })
        .into()
}
