// src/error.rs

/// Errors that can end an extraction run.
///
/// Landing on the wrong page is not an error; see `runner::RunOutcome`.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}) for {url}")]
    Status { status: u16, url: String },

    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("Malformed element at index {index}: {reason}")]
    MalformedElement { index: usize, reason: &'static str },

    #[error("Unknown channel `{0}`; run `docs` or `find` to list the available codes")]
    UnknownChannel(String),

    #[error("No programmes found on the page for {0}")]
    EmptySchedule(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
