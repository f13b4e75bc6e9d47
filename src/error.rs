use std::fmt;

/// Custom error type for apictl operations
#[derive(Debug)]
pub enum ApictlError {
    /// The listing endpoint could not be reached
    Transport(reqwest::Error),
    /// A 200 response carried a body that is not a valid listing envelope
    Decode(String),
    /// The server answered with a non-200 status; `message` is the raw body
    Remote { status: u16, message: String },
    /// The format string failed to compile or execute
    Template(String),
    /// Writing rendered output to the sink failed
    Write(std::io::Error),
    /// Token not found in any source
    TokenNotFound(String),
    /// Environment not configured or not selectable
    EnvironmentNotFound(String),
    /// Configuration file error
    Config(String),
}

impl fmt::Display for ApictlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApictlError::Transport(e) => write!(f, "Unable to connect: {}", e),
            ApictlError::Decode(msg) => write!(f, "Invalid JSON response: {}", msg),
            ApictlError::Remote { message, .. } => write!(f, "{}", message),
            ApictlError::Template(msg) => write!(f, "Template error: {}", msg),
            ApictlError::Write(e) => write!(f, "Failed to write output: {}", e),
            ApictlError::TokenNotFound(msg) => write!(f, "{}", msg),
            ApictlError::EnvironmentNotFound(msg) => write!(f, "{}", msg),
            ApictlError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApictlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApictlError::Transport(e) => Some(e),
            ApictlError::Write(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApictlError {
    fn from(err: reqwest::Error) -> Self {
        ApictlError::Transport(err)
    }
}

impl From<std::io::Error> for ApictlError {
    fn from(err: std::io::Error) -> Self {
        ApictlError::Write(err)
    }
}

/// Result type alias for apictl operations
pub type Result<T> = std::result::Result<T, ApictlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_is_verbatim_body() {
        let err = ApictlError::Remote {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApictlError>();
    }

    #[test]
    fn test_decode_error_display() {
        let err = ApictlError::Decode("expected value at line 1".to_string());
        assert!(err.to_string().contains("Invalid JSON response"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_template_error_display() {
        let err = ApictlError::Template("unknown field \"Owner\"".to_string());
        assert!(err.to_string().starts_with("Template error"));
        assert!(err.to_string().contains("Owner"));
    }

    #[test]
    fn test_token_not_found_display() {
        let err = ApictlError::TokenNotFound("No token for 'dev'".to_string());
        assert_eq!(err.to_string(), "No token for 'dev'");
    }

    #[test]
    fn test_config_error_display() {
        let err = ApictlError::Config("Missing required config".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Missing required config"));
    }

    #[test]
    fn test_from_io_error_is_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ApictlError = io_err.into();
        match err {
            ApictlError::Write(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            _ => panic!("Expected ApictlError::Write"),
        }
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = ApictlError::Remote {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());

        let err = ApictlError::Write(std::io::Error::other("disk full"));
        assert!(err.source().is_some());
    }
}
