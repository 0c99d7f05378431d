// SPDX-License-Identifier: MPL-2.0
//! Volume listing.

use super::client::ApiClient;
use super::response::ApiResponse;
use super::VOLUMES_PATH;
use crate::error::{Error, Result};
use serde::Deserialize;

/// A storage volume registered with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Volume {
    pub id: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesData {
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

/// Result of a successful listing.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeListing {
    /// Count reported by the backend in `meta.count`.
    pub count: u64,
    pub volumes: Vec<Volume>,
    /// Server time of the listing, as sent.
    pub timestamp: Option<String>,
}

impl VolumeListing {
    /// Validates a decoded envelope.
    ///
    /// A listing is only accepted when `success` is set and `meta.count` is
    /// present; the volume list itself may be missing.
    pub fn from_response(response: ApiResponse<VolumesData>) -> Result<Self> {
        let count = response.meta.as_ref().and_then(|meta| meta.count);
        match (response.success, count) {
            (true, Some(count)) => Ok(Self {
                count,
                volumes: response.data.map(|data| data.volumes).unwrap_or_default(),
                timestamp: response.meta.and_then(|meta| meta.timestamp),
            }),
            _ => Err(Error::Payload(
                response
                    .error_message()
                    .unwrap_or("no valid volume data in response")
                    .to_string(),
            )),
        }
    }
}

/// Fetches the volume listing.
pub async fn fetch_volumes(client: ApiClient) -> Result<VolumeListing> {
    let response = client.get::<VolumesData>(VOLUMES_PATH).await?;
    let listing = VolumeListing::from_response(response)?;
    tracing::debug!(count = listing.count, "volumes fetched");
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ApiResponse<VolumesData> {
        serde_json::from_str(json).expect("valid envelope")
    }

    #[test]
    fn accepts_listing_with_count() {
        let listing = VolumeListing::from_response(decode(
            r#"{"success":true,
                "data":{"volumes":[{"id":"a1","path":"/mnt/a"},{"id":"b2","path":"/mnt/b"}]},
                "meta":{"count":2,"timestamp":"2024-05-14T12:30:05Z"}}"#,
        ))
        .expect("listing should be accepted");

        assert_eq!(listing.count, 2);
        assert_eq!(listing.volumes[1].path, "/mnt/b");
        assert_eq!(listing.timestamp.as_deref(), Some("2024-05-14T12:30:05Z"));
    }

    #[test]
    fn missing_volume_list_is_empty() {
        let listing = VolumeListing::from_response(decode(
            r#"{"success":true,"data":null,"meta":{"count":0}}"#,
        ))
        .expect("listing should be accepted");
        assert!(listing.volumes.is_empty());
    }

    #[test]
    fn missing_count_is_rejected() {
        let result = VolumeListing::from_response(decode(
            r#"{"success":true,"data":{"volumes":[]}}"#,
        ));
        assert!(matches!(result, Err(Error::Payload(_))));
    }

    #[test]
    fn backend_error_message_is_kept() {
        let result = VolumeListing::from_response(decode(
            r#"{"success":false,"meta":{"error":"config not loaded"}}"#,
        ));
        assert!(matches!(result, Err(Error::Payload(message)) if message == "config not loaded"));
    }
}
