// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for delays, intervals and
//! endpoints used across the dashboard. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Base URL and request timeout
//! - **Notifications**: Toast lifetimes
//! - **Connectivity**: Health-check cadence and manual retry feedback
//! - **Sidebar**: Hover-intent delays for the server info card
//! - **Runtime**: Tick and polling cadences

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the local ipelfs backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:33330";

/// Timeout applied to every REST request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of a toast when the producer does not pick one (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Lifetime of the "could not verify client" toast (in milliseconds).
pub const UA_LOOKUP_FAILED_DURATION_MS: u64 = 3500;

// ==========================================================================
// Connectivity Defaults
// ==========================================================================

/// Poll interval while the backend answers (in milliseconds).
pub const CONNECTED_POLL_INTERVAL_MS: u64 = 1000;

/// Base poll interval while the backend is unreachable (in milliseconds).
pub const OFFLINE_BASE_INTERVAL_MS: u64 = 5000;

/// Cap on the backoff exponent (`5000 * 2^6` = 320 s).
pub const MAX_BACKOFF_EXPONENT: u32 = 6;

/// Grace period before a manual retry is reported as failed (in milliseconds).
pub const MANUAL_RETRY_GRACE_MS: u64 = 3000;

/// Duration of the retry button shake (in milliseconds).
pub const RETRY_SHAKE_MS: u64 = 300;

/// How long the failure icon stays after the shake (in milliseconds).
pub const RETRY_FAILURE_ICON_MS: u64 = 700;

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Hover time before the server info card appears (in milliseconds).
pub const DEFAULT_HOVER_SHOW_DELAY_MS: u64 = 700;

/// Grace time before the server info card disappears (in milliseconds).
pub const DEFAULT_HOVER_HIDE_DELAY_MS: u64 = 300;

/// Minimum configurable hover delay (in milliseconds).
pub const MIN_HOVER_DELAY_MS: u64 = 50;

/// Maximum configurable hover delay (in milliseconds).
pub const MAX_HOVER_DELAY_MS: u64 = 3000;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Tick cadence while any deadline is pending (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

/// How often the OS color scheme is re-read (in seconds).
pub const SYSTEM_THEME_POLL_SECS: u64 = 2;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(DEFAULT_NOTIFICATION_DURATION_MS > 0);
    assert!(UA_LOOKUP_FAILED_DURATION_MS > 0);

    assert!(CONNECTED_POLL_INTERVAL_MS < OFFLINE_BASE_INTERVAL_MS);
    assert!(MAX_BACKOFF_EXPONENT < 16);
    assert!(MANUAL_RETRY_GRACE_MS > RETRY_SHAKE_MS);

    assert!(MIN_HOVER_DELAY_MS > 0);
    assert!(DEFAULT_HOVER_SHOW_DELAY_MS >= MIN_HOVER_DELAY_MS);
    assert!(DEFAULT_HOVER_SHOW_DELAY_MS <= MAX_HOVER_DELAY_MS);
    assert!(DEFAULT_HOVER_HIDE_DELAY_MS >= MIN_HOVER_DELAY_MS);
    assert!(DEFAULT_HOVER_HIDE_DELAY_MS <= MAX_HOVER_DELAY_MS);

    assert!(TICK_INTERVAL_MS < CONNECTED_POLL_INTERVAL_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_cap_is_about_five_minutes() {
        let cap = OFFLINE_BASE_INTERVAL_MS * 2u64.pow(MAX_BACKOFF_EXPONENT);
        assert_eq!(cap, 320_000);
    }

    #[test]
    fn hover_defaults_are_valid() {
        assert_eq!(DEFAULT_HOVER_SHOW_DELAY_MS, 700);
        assert_eq!(DEFAULT_HOVER_HIDE_DELAY_MS, 300);
        assert!(DEFAULT_HOVER_SHOW_DELAY_MS > DEFAULT_HOVER_HIDE_DELAY_MS);
    }

    #[test]
    fn retry_feedback_fits_in_grace_period() {
        assert!(RETRY_SHAKE_MS + RETRY_FAILURE_ICON_MS < MANUAL_RETRY_GRACE_MS);
    }
}
