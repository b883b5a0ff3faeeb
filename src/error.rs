//! Error types for the task API client.

use serde_json::Value;

/// Fallback message when an error body carries nothing readable.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Local form validation failures, raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
}

/// Errors surfaced by [`crate::api::ApiClient`].
///
/// Views only ever render these through `to_string()`, so the display text of
/// every variant is written for end users.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. Status and structured detail are dropped.
    #[error("{message}")]
    Request { message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body could not be encoded or decoded.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value was required but the server answered with an empty body.
    #[error("empty response from {endpoint}")]
    EmptyBody { endpoint: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ApiError {
    /// Build a request error from a failed response body.
    ///
    /// Looks at `error` first, then `detail`; anything else becomes
    /// [`GENERIC_FAILURE`].
    pub fn from_error_body(body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "detail"]
                    .iter()
                    .find_map(|field| value.get(field).and_then(message_text))
            })
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Self::Request { message }
    }
}

/// A string, or a list of strings joined with spaces. Empty text counts as
/// absent.
fn message_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        _ => return None,
    };
    Some(text).filter(|t| !t.trim().is_empty())
}
