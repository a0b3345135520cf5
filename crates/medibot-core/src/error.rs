//! Error taxonomy for gateway calls and response parsing.
//!
//! Expected failures are returned as values; nothing in the gateway or
//! parser panics across its boundary. Transient failures carry a
//! [`FailureClass`] so the backoff policy can decide whether to retry.

use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, Error>;

/// Errors produced by the gateway client, the response parser, and the
/// feature adapters.
#[derive(Error, Debug)]
pub enum Error {
    /// Credential or endpoint configuration is unusable. Detected before
    /// any network call is made.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration.
        message: String,
    },

    /// The endpoint returned HTTP 429.
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Message from the endpoint, if any.
        message: String,
    },

    /// The endpoint returned a 5xx status.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the endpoint, if any.
        message: String,
    },

    /// The request never completed: connection failure or timeout.
    #[error("Network error: {message}")]
    Network {
        /// Transport-level description.
        message: String,
    },

    /// The endpoint rejected the request (4xx other than 429).
    #[error("Request rejected: {message}")]
    Client {
        /// HTTP status code, when the rejection came over the wire.
        status: Option<u16>,
        /// Message from the endpoint or local validation.
        message: String,
    },

    /// The endpoint answered 2xx but the completion text was empty after
    /// trimming. Treated as a content problem, not a transport problem.
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// The response body did not match the expected shape.
    #[error("Malformed response: {message}")]
    Malformed {
        /// What failed to parse.
        message: String,
        /// The raw text, kept so callers can degrade to showing it.
        raw: String,
    },

    /// All retry attempts were consumed.
    #[error("Gave up after {attempts} attempts: {last}")]
    Exhausted {
        /// Total attempts made.
        attempts: u32,
        /// The last underlying error.
        last: Box<Error>,
    },
}

/// Coarse error classification, one per taxonomy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or placeholder credential.
    Configuration,
    /// HTTP 429.
    RateLimited,
    /// HTTP 5xx.
    ServerError,
    /// Connection failure or timeout.
    NetworkError,
    /// HTTP 4xx other than 429, or a locally rejected request.
    ClientError,
    /// Empty completion on a 2xx response.
    EmptyResponse,
    /// Unparseable response body.
    Malformed,
    /// Retries consumed.
    Exhausted,
}

/// Failure classification fed to the backoff policy.
///
/// Only errors observed during an attempt carry a class; content-level
/// failures (`EmptyResponse`, `Malformed`) do not and are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// HTTP 429. Retryable.
    RateLimited,
    /// HTTP 5xx. Retryable.
    ServerError,
    /// Connection failure or timeout. Retryable.
    NetworkError,
    /// Malformed request or bad credential. Never retried.
    ClientError,
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a rate-limited error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Create a server error.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a client error for a wire-level rejection.
    pub fn client(status: u16, message: impl Into<String>) -> Self {
        Self::Client {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a client error for a locally rejected request.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::Client {
            status: None,
            message: message.into(),
        }
    }

    /// Create a malformed-response error, keeping the raw text.
    pub fn malformed(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            raw: raw.into(),
        }
    }

    /// Create an exhausted error wrapping the last underlying failure.
    pub fn exhausted(attempts: u32, last: Error) -> Self {
        Self::Exhausted {
            attempts,
            last: Box::new(last),
        }
    }

    /// The taxonomy entry this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Server { .. } => ErrorKind::ServerError,
            Self::Network { .. } => ErrorKind::NetworkError,
            Self::Client { .. } => ErrorKind::ClientError,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Exhausted { .. } => ErrorKind::Exhausted,
        }
    }

    /// The failure class fed to the backoff policy, if this error was
    /// observed during an attempt.
    pub fn failure_class(&self) -> Option<FailureClass> {
        match self {
            Self::RateLimited { .. } => Some(FailureClass::RateLimited),
            Self::Server { .. } => Some(FailureClass::ServerError),
            Self::Network { .. } => Some(FailureClass::NetworkError),
            Self::Client { .. } => Some(FailureClass::ClientError),
            _ => None,
        }
    }

    /// The raw response text, when a parse failure preserved it.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::Malformed { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Get the HTTP status code if one was observed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Server { status, .. } => Some(*status),
            Self::Client { status, .. } => *status,
            Self::Exhausted { last, .. } => last.status_code(),
            _ => None,
        }
    }
}
