use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid API URL: {0}")]
    Config(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error, pulling the message from an `{ "error": "..." }` body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: parse_error_body(body),
        }
    }

    /// Text for the page alert: the server's own message when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}
