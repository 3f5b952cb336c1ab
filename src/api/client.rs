// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the dog search service.

use crate::api::models::{QueryResult, SearchRequest, SearchResponseWire};
use crate::error::ApiError;
use std::time::Duration;

/// Default service endpoint, overridable via config or `--api-url`.
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Thin wrapper around `reqwest::Client`. Cloning is cheap (the underlying
/// connection pool is shared), so update handlers can move a clone into the
/// async task that performs the call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: normalize_base_url(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs one search invocation. The response serves both the result list
    /// and the match identifier; callers never issue a second identical
    /// request to read the other half.
    pub async fn search_dogs(&self, request: &SearchRequest) -> Result<QueryResult, ApiError> {
        let url = format!("{}/dogs/search", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let wire: SearchResponseWire = response.json().await?;
        Ok(wire.into())
    }

    /// Fetches the full breed catalog for the filter dropdown.
    pub async fn list_breeds(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/dogs/breeds", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Downloads a dog photo. The bytes go straight into an iced image
    /// handle; decoding happens on the render side.
    pub async fn fetch_photo(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_the_base_url() {
        let client = ApiClient::new("https://example.com/api//");
        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[test]
    fn default_client_points_at_the_service() {
        let client = ApiClient::default();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
