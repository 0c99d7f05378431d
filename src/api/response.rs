// SPDX-License-Identifier: MPL-2.0
//! The `{success, data, meta}` envelope shared by every endpoint.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Metadata block. Failed requests carry their message in `error`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Meta {
    pub count: Option<u64>,
    pub timestamp: Option<String>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Error message reported by the backend, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.meta.as_ref()?.error.as_deref()
    }

    /// Returns `data` of a successful response.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(Error::Payload(
                self.error_message()
                    .unwrap_or("backend reported failure")
                    .to_string(),
            ));
        }
        self.data
            .ok_or_else(|| Error::Payload("response has no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_envelope() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"success":true,"data":"hi","meta":null}"#)
                .expect("valid envelope");
        assert_eq!(response.into_data().expect("has data"), "hi");
    }

    #[test]
    fn failure_message_comes_from_meta() {
        let response: ApiResponse<String> = serde_json::from_str(
            r#"{"success":false,"data":null,"meta":{"error":"volume scan failed"}}"#,
        )
        .expect("valid envelope");
        assert_eq!(response.error_message(), Some("volume scan failed"));
        assert!(matches!(
            response.into_data(),
            Err(Error::Payload(message)) if message == "volume scan failed"
        ));
    }

    #[test]
    fn missing_fields_are_tolerated() {
        let response: ApiResponse<String> = serde_json::from_str("{}").expect("valid envelope");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert!(response.error_message().is_none());
    }

    #[test]
    fn success_without_data_is_an_error() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"success":true}"#).expect("valid envelope");
        assert!(response.into_data().is_err());
    }
}
