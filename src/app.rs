//! Task Manager Frontend App
//!
//! Root component: wires the client, session and store, then picks between
//! the login screen and the task page once the session is ready.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{FilterBar, Header, LoginPage, StatsBar, TaskForm, TaskList};
use crate::config::ApiConfig;
use crate::context::{use_api, AppContext, AuthContext};
use crate::session::SessionManager;
use crate::storage::default_storage;
use crate::store::{store_load_tasks, use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("using API at {}", config.base_url);
    let manager = SessionManager::new(ApiClient::new(config, default_storage()));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(manager.client().clone());
    let auth = AuthContext::new(manager);
    provide_context(auth);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(Store::new(AppState::default()));

    // Restore after the first render; views wait on the ready flag
    Effect::new(move |_| auth.restore());

    move || {
        if !auth.is_ready() {
            view! { <div class="loading-screen"><div class="spinner"></div></div> }.into_any()
        } else if auth.is_authenticated() {
            view! { <TaskPage /> }.into_any()
        } else {
            view! { <LoginPage /> }.into_any()
        }
    }
}

#[component]
fn TaskPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let client = use_api();

    // Load tasks when the filter or trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let filter = store.filter().get();
        log::debug!("loading {:?} tasks, trigger={}", filter, trigger);
        store_load_tasks(store, client.clone(), filter);
    });

    let close_create = Callback::new(move |_: ()| store.show_form().set(false));
    let created = Callback::new(move |_: ()| {
        store.show_form().set(false);
        ctx.reload();
    });
    let close_edit = Callback::new(move |_: ()| store.editing().set(None));
    let updated = Callback::new(move |_: ()| {
        store.editing().set(None);
        ctx.reload();
    });

    view! {
        <div class="task-page">
            <Header />
            <main class="main-content">
                <StatsBar />
                <FilterBar />

                {move || store.error().get().map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <Show when=move || store.show_form().get()>
                    <TaskForm on_done=created on_cancel=close_create />
                </Show>

                {move || store.editing().get().map(|task| view! {
                    <TaskForm initial=task on_done=updated on_cancel=close_edit />
                })}

                <TaskList />
            </main>
        </div>
    }
}
