// SPDX-License-Identifier: MPL-2.0
//! One health-check round trip.

use super::latency::Latency;
use super::timestamp::parse_server_timestamp;
use crate::api::{ApiClient, ApiResponse, HEALTHCHECK_PATH};
use chrono::{DateTime, Utc};

/// Handle for a probe in flight.
///
/// Carries the wall-clock send time so latency can be computed against the
/// server's timestamp when the answer arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTicket {
    pub(super) id: u64,
    sent_at: DateTime<Utc>,
}

impl ProbeTicket {
    pub(super) fn new(id: u64, sent_at: DateTime<Utc>) -> Self {
        Self { id, sent_at }
    }

    #[must_use]
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

/// What a probe found out.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The backend answered `success: true`.
    Healthy { latency: Latency },
    /// Transport error, non-2xx status, malformed payload or `success: false`.
    Failed { reason: String },
}

impl ProbeOutcome {
    /// Interprets a decoded health-check envelope.
    ///
    /// The backend is healthy as soon as it reports success; a timestamp
    /// that is missing or unparseable only makes the latency invalid.
    #[must_use]
    pub fn from_response(sent_at: DateTime<Utc>, response: &ApiResponse<serde_json::Value>) -> Self {
        if !response.success {
            return ProbeOutcome::Failed {
                reason: response
                    .error_message()
                    .unwrap_or("health check reported failure")
                    .to_string(),
            };
        }

        let latency = match response.data.as_ref().and_then(serde_json::Value::as_str) {
            Some(text) => match parse_server_timestamp(text) {
                Ok(server_time) => Latency::between(sent_at, server_time),
                Err(error) => {
                    tracing::warn!(%error, "unusable health-check timestamp");
                    Latency::Invalid
                }
            },
            None => {
                tracing::warn!("health-check response carries no timestamp");
                Latency::Invalid
            }
        };
        ProbeOutcome::Healthy { latency }
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }
}

/// Runs the probe described by `ticket`. Never fails: errors become
/// [`ProbeOutcome::Failed`].
pub async fn run(client: ApiClient, ticket: ProbeTicket) -> (ProbeTicket, ProbeOutcome) {
    let outcome = match client.get::<serde_json::Value>(HEALTHCHECK_PATH).await {
        Ok(response) => ProbeOutcome::from_response(ticket.sent_at, &response),
        Err(error) => {
            tracing::debug!(%error, "health check failed");
            ProbeOutcome::Failed {
                reason: error.to_string(),
            }
        }
    };
    (ticket, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sent_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 14, 12, 30, 5)
            .single()
            .expect("valid date")
            + chrono::Duration::milliseconds(490)
    }

    fn decode(json: &str) -> ApiResponse<serde_json::Value> {
        serde_json::from_str(json).expect("valid envelope")
    }

    #[test]
    fn healthy_response_measures_latency() {
        let outcome = ProbeOutcome::from_response(
            sent_at(),
            &decode(r#"{"success":true,"data":"2024-05-14T12:30:05.500000000Z"}"#),
        );
        assert_eq!(
            outcome,
            ProbeOutcome::Healthy {
                latency: Latency::Measured(10_000_000)
            }
        );
    }

    #[test]
    fn unparseable_timestamp_is_healthy_with_invalid_latency() {
        let outcome = ProbeOutcome::from_response(
            sent_at(),
            &decode(r#"{"success":true,"data":"not a time"}"#),
        );
        assert_eq!(
            outcome,
            ProbeOutcome::Healthy {
                latency: Latency::Invalid
            }
        );
    }

    #[test]
    fn non_string_data_is_healthy_with_invalid_latency() {
        let outcome =
            ProbeOutcome::from_response(sent_at(), &decode(r#"{"success":true,"data":42}"#));
        assert!(outcome.is_healthy());
    }

    #[test]
    fn unsuccessful_response_fails() {
        let outcome = ProbeOutcome::from_response(
            sent_at(),
            &decode(r#"{"success":false,"meta":{"error":"shutting down"}}"#),
        );
        assert_eq!(
            outcome,
            ProbeOutcome::Failed {
                reason: "shutting down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unreachable_backend_fails_without_error() {
        let config = crate::config::BackendConfig {
            // Port 9 (discard) on loopback is closed on test machines.
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
        };
        let ticket = ProbeTicket::new(1, Utc::now());
        let (returned, outcome) = run(ApiClient::new(&config), ticket.clone()).await;

        assert_eq!(returned, ticket);
        assert!(!outcome.is_healthy());
    }
}
