//! TfL client error types.

/// Errors from talking to the TfL API (or a fixture standing in for it).
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response parsed but failed validation
    #[error("invalid response: {0}")]
    Conversion(#[from] super::ConversionError),

    /// Client configuration is unusable
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Fixture data could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

impl TflError {
    /// Build a `Json` error, keeping the start of the offending body.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        TflError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
