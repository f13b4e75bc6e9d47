//! Common listing types shared across API Manager resources

use serde::Deserialize;

/// Wire envelope returned by listing endpoints
#[derive(Deserialize, Debug)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub count: i64,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

/// Decoded listing: server-reported count plus records in wire order
#[derive(Debug, Clone)]
pub struct ListingResult<T> {
    /// Advisory total reported by the server
    pub count: i64,
    /// Records in presentation order
    pub records: Vec<T>,
}

impl<T> From<ListEnvelope<T>> for ListingResult<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        Self {
            count: envelope.count,
            records: envelope.list,
        }
    }
}
