// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for remote search failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    InvalidBaseUrl(String),

    /// The request never reached the service (DNS, refused, TLS, offline).
    Network(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be decoded into the expected shape.
    Decode(String),

    /// The request was abandoned by the transport before a response arrived.
    Timeout,

    /// Generic error with raw message.
    Other(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl(_) => "error-search-invalid-base-url",
            ApiError::Network(_) => "error-search-network",
            ApiError::Status(status) if *status == 401 || *status == 403 => {
                "error-search-unauthorized"
            }
            ApiError::Status(_) => "error-search-status",
            ApiError::Decode(_) => "error-search-decode",
            ApiError::Timeout => "error-search-timeout",
            ApiError::Other(_) => "error-search-general",
        }
    }

    /// Attempts to parse a raw transport error message into a specific
    /// ApiError type. Used to categorize errors coming out of the HTTP client.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
            return ApiError::Timeout;
        }

        if msg_lower.contains("dns")
            || msg_lower.contains("connection refused")
            || msg_lower.contains("connection reset")
            || msg_lower.contains("connect")
            || msg_lower.contains("certificate")
            || msg_lower.contains("channel closed")
        {
            return ApiError::Network(msg.to_string());
        }

        if msg_lower.contains("decod")
            || msg_lower.contains("missing field")
            || msg_lower.contains("invalid type")
            || msg_lower.contains("expected")
        {
            return ApiError::Decode(msg.to_string());
        }

        if msg_lower.contains("relative url")
            || msg_lower.contains("invalid url")
            || msg_lower.contains("builder error")
        {
            return ApiError::InvalidBaseUrl(msg.to_string());
        }

        ApiError::Other(msg.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidBaseUrl(url) => write!(f, "Invalid service URL: {}", url),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(status) => write!(f, "Service responded with HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "Search Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        if let Some(status) = err.status() {
            return ApiError::Status(status.as_u16());
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        if err.is_builder() {
            return ApiError::InvalidBaseUrl(err.to_string());
        }
        ApiError::from_message(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_from_message_timeout() {
        let err = ApiError::from_message("operation timed out");
        assert_eq!(err, ApiError::Timeout);
    }

    #[test]
    fn api_error_from_message_network() {
        let err = ApiError::from_message("error trying to connect: connection refused");
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn api_error_from_message_decode() {
        let err = ApiError::from_message("error decoding response body: missing field `dogObj`");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(
            ApiError::Network("down".into()).i18n_key(),
            "error-search-network"
        );
        assert_eq!(ApiError::Status(500).i18n_key(), "error-search-status");
        assert_eq!(ApiError::Status(401).i18n_key(), "error-search-unauthorized");
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Status(503);
        assert!(format!("{}", err).contains("503"));
    }
}
