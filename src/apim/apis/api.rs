//! API listing operations

use crate::apim::traits::ListingResult;
use crate::apim::ApimClient;
use crate::error::Result;

use super::models::Api;

impl ApimClient {
    /// List APIs from an environment's listing endpoint
    ///
    /// `query` is appended as `?query=<value>` when non-empty; the caller
    /// supplies it already in the server's `key:value` form.
    pub async fn list_apis(&self, query: &str, endpoint: &str) -> Result<ListingResult<Api>> {
        self.fetch_listing::<Api>(endpoint, query, "APIs").await
    }
}
