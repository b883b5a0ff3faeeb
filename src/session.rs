//! Session Lifecycle
//!
//! Token + profile persistence, independent of the reactive layer. The
//! Leptos-facing wrapper lives in [`crate::context::AuthContext`].

use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::storage::{KeyValueStore, AUTH_TOKEN_KEY, USER_KEY};

/// Authenticated-user context held by the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// An absent token means logged out, whatever `user` holds.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.token.as_ref().and(self.user.as_ref())
    }
}

/// Drives login, logout and restore against the API client and storage.
#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    pub fn new(client: ApiClient) -> Self {
        let storage = client.storage();
        Self { client, storage }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Rebuild the session persisted by a previous page load.
    ///
    /// Only a stored token *and* a readable stored profile count; the token is
    /// handed to the client before anything else can issue a request.
    pub fn restore(&self) -> Session {
        let (Some(token), Some(raw_user)) = (
            self.storage.get_item(AUTH_TOKEN_KEY),
            self.storage.get_item(USER_KEY),
        ) else {
            return Session::logged_out();
        };

        let user = match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("ignoring unreadable stored profile: {e}");
                return Session::logged_out();
            }
        };

        self.client.set_token(Some(&token));
        log::info!("restored session for {}", user.username);
        Session {
            token: Some(token),
            user: Some(user),
        }
    }

    /// Adopt a token obtained elsewhere and load the matching profile.
    ///
    /// Never fails: if the profile cannot be fetched the session carries a
    /// placeholder built from `username` (id 0, empty email).
    pub async fn login(&self, username: &str, _password: &str, token: &str) -> Session {
        self.client.set_token(Some(token));

        let user = match self.client.current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("profile fetch failed, using placeholder: {e}");
                User::placeholder(username)
            }
        };
        self.persist_user(&user);

        Session {
            token: Some(token.to_string()),
            user: Some(user),
        }
    }

    /// `POST /login/` then [`Self::login`] with the returned token.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self.client.login(username, password).await?;
        log::debug!("credentials accepted for user {}", response.user.id);
        Ok(self.login(username, password, &response.token).await)
    }

    /// `POST /register/` then [`Self::login`] with the returned token.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        let response = self.client.register(username, email, password).await?;
        log::info!(
            "registered user {}: {}",
            response.user.id,
            response.message.as_deref().unwrap_or("ok")
        );
        Ok(self.login(username, password, &response.token).await)
    }

    /// Forget the token and profile everywhere.
    pub fn logout(&self) {
        self.client.set_token(None);
        self.storage.remove_item(USER_KEY);
        self.storage.remove_item(AUTH_TOKEN_KEY);
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set_item(USER_KEY, &json),
            Err(e) => log::error!("failed to serialize profile: {e}"),
        }
    }
}
