// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client for the backend REST API.

use super::response::ApiResponse;
use crate::config::BackendConfig;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// User agent sent with every request, e.g. `ipelfs-dash/0.1.0`.
#[must_use]
pub fn client_user_agent() -> String {
    format!("{}/{}", crate::app::paths::APP_NAME, env!("CARGO_PKG_VERSION"))
}

/// Joins `base` and `path` with exactly one slash between them.
#[must_use]
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Cheap-to-clone handle over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(client_user_agent())
            .build()
            .unwrap_or_else(|error| {
                tracing::error!(%error, "failed to configure HTTP client, using defaults");
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    /// Issues `GET path` and decodes the envelope.
    ///
    /// Non-2xx responses are errors; their message is taken from
    /// `meta.error` when the body carries one.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let url = self.url(path);
        tracing::trace!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.error_message().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP status {status}"));
            return Err(Error::Http(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_normalizes_slashes() {
        assert_eq!(
            build_url("http://localhost:33330/", "/v1/ipelfs/ua"),
            "http://localhost:33330/v1/ipelfs/ua"
        );
        assert_eq!(
            build_url("http://localhost:33330", "v1/ipelfs/ua"),
            "http://localhost:33330/v1/ipelfs/ua"
        );
    }

    #[test]
    fn client_url_uses_configured_base() {
        let config = BackendConfig {
            base_url: "http://10.0.0.5:4000/".to_string(),
            ..BackendConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/v1/ipelfs/volumes"), "http://10.0.0.5:4000/v1/ipelfs/volumes");
    }

    #[test]
    fn user_agent_names_the_application() {
        assert!(client_user_agent().starts_with("ipelfs-dash/"));
    }
}
