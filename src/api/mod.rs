// SPDX-License-Identifier: MPL-2.0
//! Client side of the ipelfs backend API.
//!
//! Every REST endpoint answers with the same JSON envelope,
//! `{success, data, meta}`, decoded as [`ApiResponse`]. The modules here
//! wrap the few endpoints the dashboard consumes:
//!
//! - [`client`] - shared `reqwest` client and URL building
//! - [`volumes`] - volume listing
//! - [`user_agent`] - the user agent as seen by the backend
//! - [`live`] - the WebSocket live channel
//!
//! The health check itself lives with the connectivity monitor.

pub mod client;
pub mod live;
pub mod response;
pub mod user_agent;
pub mod volumes;

pub use client::{build_url, client_user_agent, ApiClient};
pub use live::{LiveChannel, LiveEvent, LiveStatus, LiveUpdate};
pub use response::{ApiResponse, Meta};
pub use volumes::{Volume, VolumeListing};

/// Health-check endpoint.
pub const HEALTHCHECK_PATH: &str = "/v1/ipelfs/healthcheck";
/// User-agent echo endpoint.
pub const USER_AGENT_PATH: &str = "/v1/ipelfs/ua";
/// Volume listing endpoint.
pub const VOLUMES_PATH: &str = "/v1/ipelfs/volumes";
/// WebSocket live channel endpoint.
pub const SOCKET_PATH: &str = "/v1/ipelfs/socket";
