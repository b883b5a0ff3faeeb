//! API Configuration
//!
//! The base URL is baked in at build time from `TODO_API_URL`.

/// Used when `TODO_API_URL` was not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Join an endpoint such as `/tasks/` onto the base URL.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
