//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Transport failure: network unreachable or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The backend answered 2xx but the body carried an `error` field.
    #[error("Backend error: {0}")]
    Domain(String),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// True for failures reported by the backend inside a successful response.
    pub fn is_domain(&self) -> bool {
        matches!(self, SdkError::Domain(_))
    }

    /// True for network failures and non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Http(_))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other 4xx; keeps the status the backend sent.
    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },
}

impl HttpError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::ServerError { status, .. } => Some(*status),
            HttpError::Unauthorized(_) => Some(401),
            HttpError::Forbidden(_) => Some(403),
            HttpError::NotFound(_) => Some(404),
            HttpError::BadRequest { status, .. } => Some(*status),
        }
    }

    /// Map a non-success status and its message onto an error variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => HttpError::Unauthorized(message),
            403 => HttpError::Forbidden(message),
            404 => HttpError::NotFound(message),
            400..=499 => HttpError::BadRequest {
                status,
                body: message,
            },
            _ => HttpError::ServerError {
                status,
                body: message,
            },
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),
}
