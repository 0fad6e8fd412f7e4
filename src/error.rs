use thiserror::Error;

use crate::polyline::PolylineError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route steps returned")]
    NoSteps,

    #[error("failed to decode step polyline: {0}")]
    Polyline(#[from] PolylineError),

    /// Transport or decode failure. The request URL is stripped because it
    /// carries the API key.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("directions status {status}{}", message_suffix(.message))]
    Status {
        status: String,
        message: Option<String>,
    },
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Request(err.without_url())
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}
