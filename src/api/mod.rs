//! Task API Client
//!
//! HTTP bindings to the remote task service, organized by domain.

mod auth;
mod task;

use std::sync::{Arc, RwLock};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::storage::{KeyValueStore, AUTH_TOKEN_KEY};

/// Thin wrapper around `reqwest` that injects the bearer token and
/// normalizes responses.
///
/// Cheap to clone; clones share the token and the storage handle.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Arc<RwLock<Option<String>>>,
    storage: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Starts without a token; the session restores it explicitly.
    pub fn new(config: ApiConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.storage)
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Update the in-memory token and mirror it to storage.
    pub fn set_token(&self, token: Option<&str>) {
        match token {
            Some(token) => self.storage.set_item(AUTH_TOKEN_KEY, token),
            None => self.storage.remove_item(AUTH_TOKEN_KEY),
        }
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token.map(str::to_string);
    }

    /// Issue a request and decode the body.
    ///
    /// `Ok(None)` means the server answered 2xx with an empty body.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<Option<T>, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), self.config.url(endpoint))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token() {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            log::warn!("{method} {endpoint} failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_error_body(&text);
            log::warn!("{method} {endpoint} -> {status}: {err}");
            return Err(err);
        }

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let body = serde_json::to_string(body)?;
        self.request(method, endpoint, Some(body)).await
    }
}

/// Unwrap a response that must carry a value.
fn required<T>(value: Option<T>, endpoint: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::EmptyBody {
        endpoint: endpoint.to_string(),
    })
}
