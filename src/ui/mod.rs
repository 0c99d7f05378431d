// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one takes a `ViewContext` and emits its own `Message`, which the
//! application root maps into its top-level message.
//!
//! # Screens
//!
//! - [`insights`] - Backend, volume and live channel overview
//! - [`volumes`] - Volume listing
//! - [`collections`] - Collections placeholder
//! - [`activity`] - Live channel feed
//!
//! # Chrome
//!
//! - [`sidebar`] - Navigation, collapse toggle and the server info hover card
//! - [`topbar`] - Screen title, theme and language toggles
//! - [`connectivity_banner`] - Offline banner with manual retry
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Semantic color scheme per effective theme

pub mod activity;
pub mod collections;
pub mod connectivity_banner;
pub mod design_tokens;
pub mod insights;
pub mod notifications;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod topbar;
pub mod volumes;
