//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::session::{Session, SessionManager};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the API - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Reactive view of the session
///
/// `ready` stays false until [`AuthContext::restore`] has run, so views can
/// hold off on choosing between the login screen and the task page.
#[derive(Clone, Copy)]
pub struct AuthContext {
    manager: StoredValue<SessionManager>,
    session: RwSignal<Session>,
    ready: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(manager: SessionManager) -> Self {
        Self {
            manager: StoredValue::new(manager),
            session: RwSignal::new(Session::logged_out()),
            ready: RwSignal::new(false),
        }
    }

    /// Load the persisted session, then mark the session ready.
    pub fn restore(&self) {
        let session = self.manager.get_value().restore();
        self.session.set(session);
        self.ready.set(true);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.current_user().cloned())
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let session = self.manager.get_value().authenticate(username, password).await?;
        self.session.set(session);
        Ok(())
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let session = self.manager.get_value().register(username, email, password).await?;
        self.session.set(session);
        Ok(())
    }

    pub fn logout(&self) {
        self.manager.get_value().logout();
        self.session.set(Session::logged_out());
        log::info!("logged out");
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
