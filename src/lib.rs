// SPDX-License-Identifier: MPL-2.0
//! `ipelfs_dash` is a desktop dashboard for the ipelfs volume service, built
//! with the Iced GUI framework.
//!
//! It watches backend connectivity, lists volumes, follows the live event
//! channel and keeps the user's theme, language and sidebar preferences
//! across restarts. Feedback reaches the user through a toast notification
//! center.

pub mod api;
pub mod app;
pub mod compat;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod storage;
pub mod ui;
