/// Configuration constants for the API Manager REST API
pub mod api {
    /// Publisher API path appended to an environment's APIM base URL
    pub const PUBLISHER_PATH: &str = "/api/am/publisher/v1";

    /// APIs listing resource
    pub const APIS: &str = "apis";

    /// Query parameter carrying the server-side filter
    pub const QUERY_PARAM: &str = "query";

    /// Authorization scheme sent with the access token
    pub const AUTH_SCHEME: &str = "Bearer";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding an access token
    pub const TOKEN_ENV_VAR: &str = "APICTL_TOKEN";
}

/// Configuration constants for the environment store
pub mod environment {
    /// Directory under $HOME holding the config file
    pub const DIR_NAME: &str = ".apictl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable overriding the config file path
    pub const CONFIG_ENV_VAR: &str = "APICTL_CONFIG";

    /// Environment variable selecting the active environment
    pub const ENV_VAR: &str = "APICTL_ENVIRONMENT";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// HTTP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// HTTP request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
