//! Error types for the OAE REST client

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Result type alias for oae-rest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

}

impl Error {
    /// The API error behind this error, if any
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Status and headers of a response, kept for caller diagnostics
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The connection failed before a response was obtained
    #[error("Something went wrong trying to contact the server: {message}")]
    Transport {
        message: String,
        response: Option<ResponseMeta>,
    },

    /// A response arrived with a status outside the endpoint's accepted set
    #[error("{message}: {body}")]
    UnexpectedStatus {
        message: String,
        body: String,
        response: ResponseMeta,
    },

    /// Establishing the acting user's session failed
    #[error("Could not switch to user {user}: {reason}")]
    Authentication {
        user: String,
        reason: String,
        response: Option<ResponseMeta>,
    },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid context: {0}")]
    InvalidContext(String),
}

impl ApiError {
    /// Response metadata, when a response was received
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            ApiError::Transport { response, .. } | ApiError::Authentication { response, .. } => {
                response.as_ref()
            }
            ApiError::UnexpectedStatus { response, .. } => Some(response),
            ApiError::InvalidResponse(_) | ApiError::InvalidContext(_) => None,
        }
    }

    /// HTTP status of the response, when a response was received
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|meta| meta.status)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let response = err.status().map(|status| ResponseMeta {
            status,
            headers: HeaderMap::new(),
        });
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            format!("Failed to connect: {}", err)
        } else {
            err.to_string()
        };
        ApiError::Transport { message, response }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found at {0}. Create it or pass --tenant.")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Profile '{0}' not found in configuration")]
    UnknownProfile(String),

    #[error("No tenant configured. Set base_url in the profile or pass --tenant.")]
    MissingTenant,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
