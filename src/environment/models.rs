//! Environment configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::api;

/// Top-level environment configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct EnvironmentConfig {
    /// Name of the currently active environment
    #[serde(
        rename = "current-environment",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_environment: Option<String>,
    /// Map of environment name to environment configuration
    #[serde(default)]
    pub environments: BTreeMap<String, Environment>,
}

impl EnvironmentConfig {
    /// Comma-separated list of configured environment names
    pub fn names(&self) -> String {
        self.environments
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A named API Manager environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// API Manager base URL
    pub apim: String,
    /// Explicit APIs listing endpoint, overriding the one derived from `apim`
    #[serde(
        rename = "api-list-endpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_list_endpoint: Option<String>,
    /// Access token (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Environment {
    /// URL of the APIs listing endpoint for this environment
    pub fn listing_endpoint(&self) -> String {
        match &self.api_list_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "{}{}/{}",
                self.apim.trim_end_matches('/'),
                api::PUBLISHER_PATH,
                api::APIS
            ),
        }
    }
}
