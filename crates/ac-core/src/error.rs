//! Error types for the ActiveCampaign node

use thiserror::Error;

/// Main error type for node execution and API calls
#[derive(Error, Debug)]
pub enum Error {
    #[error("The resource \"{0}\" is not known!")]
    UnknownResource(String),

    #[error("The operation \"{0}\" is not known")]
    UnknownOperation(String),

    #[error("Missing parameter '{name}' for item {item}")]
    MissingParameter { name: String, item: usize },

    #[error("Parameter '{name}' for item {item} must be {expected}")]
    InvalidParameter {
        name: String,
        item: usize,
        expected: &'static str,
    },

    #[error("The ActiveCampaign credentials are not valid!")]
    InvalidCredentials,

    #[error("{message}")]
    Api { status: Option<u16>, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown resource error
    pub fn unknown_resource(resource: impl Into<String>) -> Self {
        Error::UnknownResource(resource.into())
    }

    /// Create an unknown operation error
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        Error::UnknownOperation(operation.into())
    }

    /// Create a missing parameter error
    pub fn missing_parameter(name: impl Into<String>, item: usize) -> Self {
        Error::MissingParameter {
            name: name.into(),
            item,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, item: usize, expected: &'static str) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            item,
            expected,
        }
    }

    /// Create a remote API error
    pub fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// HTTP status reported by the remote side, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::InvalidCredentials => Some(403),
            Error::Api { status, .. } => *status,
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal(err.to_string())
    }
}
