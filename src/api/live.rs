// SPDX-License-Identifier: MPL-2.0
//! WebSocket live channel.
//!
//! The socket runs inside an iced subscription: while the channel is
//! active, [`LiveChannel::subscription`] yields a stream of [`LiveUpdate`]s
//! which the application feeds back through [`LiveChannel::apply`]. Each
//! update carries the session that opened its socket, and updates from any
//! other session are dropped.
//! Connecting and disconnecting are explicit; a dropped connection stays
//! closed until [`LiveChannel::connect`] is called again.

use super::client::build_url;
use super::SOCKET_PATH;
use futures_util::stream::{self, Stream, StreamExt};
use iced::Subscription;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

type Socket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Connection status of the live channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveStatus {
    #[default]
    Initial,
    Connecting,
    Open,
    Closed,
    Error,
}

impl LiveStatus {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LiveStatus::Initial => "live-status-initial",
            LiveStatus::Connecting => "live-status-connecting",
            LiveStatus::Open => "live-status-open",
            LiveStatus::Closed => "live-status-closed",
            LiveStatus::Error => "live-status-error",
        }
    }
}

/// Events produced by the socket stream.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent {
    Opened,
    Received(String),
    Closed { code: Option<u16>, reason: String },
    Failed(String),
}

/// A [`LiveEvent`] tagged with the session whose socket produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveUpdate {
    pub session: u64,
    pub event: LiveEvent,
}

/// Rewrites an `http(s)` base URL to the socket endpoint on `ws(s)`.
#[must_use]
pub fn socket_url(base_url: &str) -> String {
    let url = build_url(base_url, SOCKET_PATH);
    if let Some(rest) = url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        url
    }
}

/// State of the live channel as seen by the UI.
#[derive(Debug, Clone)]
pub struct LiveChannel {
    url: String,
    status: LiveStatus,
    last_message: Option<String>,
    last_error: Option<String>,
    /// Bumped on every connect. Keys the subscription and tags its events.
    session: u64,
    active: bool,
}

impl LiveChannel {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            url: socket_url(base_url),
            status: LiveStatus::Initial,
            last_message: None,
            last_error: None,
            session: 0,
            active: false,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn status(&self) -> LiveStatus {
        self.status
    }

    /// Last text payload received on the current or previous connection.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Session of the most recent connect; zero before the first one.
    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether the socket is wanted (connecting or open).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Opens the socket. No effect while already open or connecting.
    pub fn connect(&mut self) {
        if matches!(self.status, LiveStatus::Open | LiveStatus::Connecting) {
            tracing::debug!("live channel already open or connecting");
            return;
        }
        tracing::info!(url = %self.url, "connecting live channel");
        self.session += 1;
        self.active = true;
        self.status = LiveStatus::Connecting;
        self.last_message = None;
        self.last_error = None;
    }

    /// Drops the socket.
    pub fn disconnect(&mut self) {
        if !self.active {
            return;
        }
        tracing::info!("closing live channel");
        self.active = false;
        self.status = LiveStatus::Closed;
    }

    /// Applies an update from the socket stream.
    pub fn apply(&mut self, update: LiveUpdate) {
        if !self.active {
            return;
        }
        if update.session != self.session {
            tracing::debug!(
                stale = update.session,
                current = self.session,
                "dropping live event from a previous session"
            );
            return;
        }
        match update.event {
            LiveEvent::Opened => {
                tracing::info!(url = %self.url, "live channel open");
                self.status = LiveStatus::Open;
            }
            LiveEvent::Received(text) => {
                tracing::debug!(len = text.len(), "live channel message");
                self.last_message = Some(text);
            }
            LiveEvent::Closed { code, reason } => {
                tracing::info!(?code, %reason, "live channel closed");
                self.status = LiveStatus::Closed;
                self.active = false;
            }
            LiveEvent::Failed(error) => {
                tracing::warn!(%error, "live channel error");
                self.status = LiveStatus::Error;
                self.last_error = Some(error);
                self.active = false;
            }
        }
    }

    /// Socket subscription, present only while the channel is active.
    pub fn subscription(&self) -> Subscription<LiveUpdate> {
        if self.active {
            Subscription::run_with((self.url.clone(), self.session), |(url, session)| {
                let session = *session;
                events(url.clone()).map(move |event| LiveUpdate { session, event })
            })
        } else {
            Subscription::none()
        }
    }

    /// Tags `event` with the current session.
    #[cfg(test)]
    pub(crate) fn tagged(&self, event: LiveEvent) -> LiveUpdate {
        LiveUpdate {
            session: self.session,
            event,
        }
    }
}

enum Phase {
    Connecting(String),
    Open(Box<Socket>),
    Done,
}

/// Connects to `url` and yields events until the socket closes.
fn events(url: String) -> impl Stream<Item = LiveEvent> {
    stream::unfold(Phase::Connecting(url), |phase| async move {
        match phase {
            Phase::Connecting(url) => match connect_async(url.as_str()).await {
                Ok((socket, _response)) => Some((LiveEvent::Opened, Phase::Open(Box::new(socket)))),
                Err(error) => Some((LiveEvent::Failed(error.to_string()), Phase::Done)),
            },
            Phase::Open(mut socket) => loop {
                match socket.next().await {
                    Some(Ok(WsMessage::Text(text))) => {
                        break Some((LiveEvent::Received(text.to_string()), Phase::Open(socket)));
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        let (code, reason) = frame
                            .map(|frame| (Some(u16::from(frame.code)), frame.reason.to_string()))
                            .unwrap_or((None, String::new()));
                        break Some((LiveEvent::Closed { code, reason }, Phase::Done));
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(error)) => {
                        break Some((LiveEvent::Failed(error.to_string()), Phase::Done));
                    }
                    None => {
                        break Some((
                            LiveEvent::Closed {
                                code: None,
                                reason: String::new(),
                            },
                            Phase::Done,
                        ));
                    }
                }
            },
            Phase::Done => None,
        }
    })
}
