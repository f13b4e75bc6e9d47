//! Access token resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{ApictlError, Result};

/// Token resolution with fallback logic
pub struct TokenResolver {
    environment: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given environment
    pub fn new(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. APICTL_TOKEN environment variable
    /// 3. Token stored with the environment
    pub fn resolve(&self, cli_token: Option<&str>, stored_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
            if !token.is_empty() {
                debug!(
                    "Using token from {} environment variable",
                    credentials::TOKEN_ENV_VAR
                );
                return Ok(token);
            }
        }

        if let Some(token) = stored_token {
            debug!("Using token stored for environment '{}'", self.environment);
            return Ok(token.to_string());
        }

        Err(ApictlError::TokenNotFound(self.token_not_found_message()))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        format!(
            "No access token found for environment '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      apictl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             3. Stored token:      apictl env add {} --apim <URL> --token <TOKEN>",
            self.environment,
            credentials::TOKEN_ENV_VAR,
            self.environment
        )
    }
}
