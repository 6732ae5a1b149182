// src/error.rs
// Error taxonomy for prompt generation

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const UNAVAILABLE_MESSAGE: &str = "AI service unavailable. Please contact support.";
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic or idea";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to generate prompt. Please try again.";

/// Hint attached to every error envelope so callers can react without parsing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusHint {
    RateLimited,
    Unavailable,
    Generic,
}

/// Coarse classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    UpstreamRateLimited,
    UpstreamUnavailable,
    UpstreamGenericFailure,
    MalformedResponse,
    TransportFailure,
    ClipboardFailure,
    Configuration,
}

#[derive(Error, Debug)]
pub enum PromptForgeError {
    #[error("{}", EMPTY_TOPIC_MESSAGE)]
    EmptyTopic,

    #[error("a generation is already in progress")]
    Busy,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimited,

    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,

    #[error("AI gateway error: {status}")]
    Upstream { status: u16 },

    /// Error envelope returned by a remote handler
    #[error("{message}")]
    Remote { message: String, hint: StatusHint },

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptForgeError>;

impl PromptForgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTopic | Self::Busy | Self::InvalidRequest(_) => ErrorKind::Validation,
            Self::RateLimited => ErrorKind::UpstreamRateLimited,
            Self::Unavailable => ErrorKind::UpstreamUnavailable,
            Self::Upstream { .. } => ErrorKind::UpstreamGenericFailure,
            Self::Remote { hint, .. } => match hint {
                StatusHint::RateLimited => ErrorKind::UpstreamRateLimited,
                StatusHint::Unavailable => ErrorKind::UpstreamUnavailable,
                StatusHint::Generic => ErrorKind::UpstreamGenericFailure,
            },
            Self::MalformedResponse(_) | Self::Json(_) => ErrorKind::MalformedResponse,
            Self::Transport(_) => ErrorKind::TransportFailure,
            Self::Clipboard(_) => ErrorKind::ClipboardFailure,
            Self::Config(_) => ErrorKind::Configuration,
        }
    }

    pub fn status_hint(&self) -> StatusHint {
        match self.kind() {
            ErrorKind::UpstreamRateLimited => StatusHint::RateLimited,
            ErrorKind::UpstreamUnavailable => StatusHint::Unavailable,
            _ => StatusHint::Generic,
        }
    }

    /// Status the HTTP surface answers with for this error
    pub fn http_status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::UpstreamUnavailable => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
            Self::Clipboard(_) => "Failed to copy prompt".to_string(),
            other => other.to_string(),
        }
    }
}
