//! API Manager HTTP client for listing endpoints

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::apim::traits::{ListEnvelope, ListingResult};
use crate::config::{api, defaults};
use crate::error::{ApictlError, Result};

/// API Manager client bound to one access token
pub struct ApimClient {
    client: Client,
    token: String,
}

impl ApimClient {
    /// Create a new client with the standard timeouts
    pub fn new(token: String) -> Result<Self> {
        Self::with_options(token, false)
    }

    /// Create a client, optionally accepting self-signed server certificates
    ///
    /// A client that cannot be built with these settings is a `Transport`
    /// error; there is no fallback to an unconfigured client.
    pub fn with_options(token: String, insecure: bool) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(insecure)
            .build()?;

        Ok(Self { client, token })
    }

    /// Create a GET request builder with the authorization header
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("{} {}", api::AUTH_SCHEME, self.token))
    }

    /// Build the listing URL, appending `?query=<value>` verbatim when set
    pub(crate) fn listing_url(endpoint: &str, query: &str) -> String {
        if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}?{}={}", endpoint, api::QUERY_PARAM, query)
        }
    }

    /// Fetch one listing envelope `{count, list}` from an endpoint
    ///
    /// Issues exactly one GET. `count` is returned as reported by the server
    /// and never drives further requests.
    ///
    /// # Errors
    /// * `Transport` if the endpoint cannot be reached or the body cannot be read
    /// * `Remote` for any non-200 status, carrying the raw response body
    /// * `Decode` if a 200 body is not a valid envelope
    pub async fn fetch_listing<T>(
        &self,
        endpoint: &str,
        query: &str,
        resource_label: &str,
    ) -> Result<ListingResult<T>>
    where
        T: DeserializeOwned,
    {
        let url = Self::listing_url(endpoint, query);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;
        let status = response.status();
        debug!("Response: {}", status);

        let body = response.text().await?;

        if status.as_u16() != 200 {
            return Err(ApictlError::Remote {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: ListEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| ApictlError::Decode(e.to_string()))?;

        debug!(
            "Server reported {} {}, returned {}",
            envelope.count,
            resource_label,
            envelope.list.len()
        );
        Ok(envelope.into())
    }
}

#[cfg(test)]
impl ApimClient {
    /// Create a test client with a fixed token
    pub fn test_client() -> Self {
        Self::new("test-token".to_string()).unwrap()
    }
}
