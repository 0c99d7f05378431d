// SPDX-License-Identifier: MPL-2.0
//! User agent as reported back by the backend.

use super::client::ApiClient;
use super::response::ApiResponse;
use super::USER_AGENT_PATH;
use crate::error::Result;
use serde_json::Value;

/// Asks the backend which user agent it saw.
///
/// `Ok(None)` means the backend answered without a usable agent string;
/// `Err` means the request itself failed.
pub async fn fetch_user_agent(client: ApiClient) -> Result<Option<String>> {
    let response = client.get::<Value>(USER_AGENT_PATH).await?;
    Ok(agent_from_response(&response))
}

/// Extracts `data.user_agent` when the backend reported success and the
/// field holds a string.
#[must_use]
pub fn agent_from_response(response: &ApiResponse<Value>) -> Option<String> {
    if !response.success {
        return None;
    }
    response
        .data
        .as_ref()?
        .get("user_agent")?
        .as_str()
        .map(str::to_string)
}
