// SPDX-License-Identifier: MPL-2.0
//! Health-check latency and its human-readable form.

use chrono::{DateTime, Utc};
use std::fmt;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Difference between the server timestamp and the local send time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// No successful probe yet, or the last one failed.
    #[default]
    Unset,
    /// The backend answered but its timestamp could not be used.
    Invalid,
    /// Signed difference in nanoseconds.
    Measured(i64),
}

impl Latency {
    /// Computes `server - sent` without going through floating point.
    #[must_use]
    pub fn between(sent_at: DateTime<Utc>, server_time: DateTime<Utc>) -> Self {
        match (server_time - sent_at).num_nanoseconds() {
            Some(nanos) => Latency::Measured(nanos),
            None => Latency::Invalid,
        }
    }

    #[must_use]
    pub fn nanos(self) -> Option<i64> {
        match self {
            Latency::Measured(nanos) => Some(nanos),
            Latency::Unset | Latency::Invalid => None,
        }
    }

    /// Formats the latency with precision decreasing as magnitude grows.
    ///
    /// Unset, invalid and negative values read `"unset"`. Values below a
    /// microsecond are shown in whole nanoseconds, values below a second in
    /// milliseconds and the rest in seconds. Within a unit, two decimals are
    /// kept below 10, one below 100 and none above; digits are truncated and
    /// trailing fractional zeros dropped.
    #[must_use]
    pub fn formatted(self) -> String {
        let nanos = match self {
            Latency::Measured(nanos) if nanos >= 0 => nanos,
            _ => return "unset".to_string(),
        };

        if nanos == 0 {
            return "0ms".to_string();
        }
        if nanos < NANOS_PER_MICRO {
            return format!("{nanos}ns");
        }
        if nanos < NANOS_PER_SEC {
            return tiered(nanos, NANOS_PER_MILLI, "ms");
        }
        tiered(nanos, NANOS_PER_SEC, "s")
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Formats `nanos` in `unit`, truncating to 2, 1 or 0 decimals.
fn tiered(nanos: i64, unit: i64, suffix: &str) -> String {
    let decimals: u32 = if nanos < 10 * unit {
        2
    } else if nanos < 100 * unit {
        1
    } else {
        0
    };

    let scale = 10_i64.pow(decimals);
    let scaled = nanos / (unit / scale);
    let whole = scaled / scale;
    let fraction = scaled % scale;

    if decimals == 0 || fraction == 0 {
        return format!("{whole}{suffix}");
    }

    let digits = format!("{fraction:0width$}", width = decimals as usize);
    format!("{whole}.{}{suffix}", digits.trim_end_matches('0'))
}
