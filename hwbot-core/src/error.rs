use thiserror::Error;

/// Every failure the notifier can produce. Only [`HwbotError::Config`] is
/// fatal; the poll loop recovers from everything else.
#[derive(Error, Debug)]
pub enum HwbotError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request to {endpoint} failed: {source}")]
    Connectivity {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("malformed API response: {0}")]
    Schema(String),

    #[error("homework record has no `{0}` field")]
    MissingField(&'static str),

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

impl HwbotError {
    /// Single dispatch point for the loop's recovery handler: fatal errors
    /// abort the process, everything else is reported and retried next cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HwbotError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, HwbotError>;
