//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Filter, Task};

/// Task page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list fetched for the current filter
    pub tasks: Vec<Task>,
    /// Which slice of the list is shown
    pub filter: Filter,
    /// A fetch is in flight
    pub loading: bool,
    /// Last fetch or mutation failure, shown in the error banner
    pub error: Option<String>,
    /// Task open in the edit form
    pub editing: Option<Task>,
    /// Create form visible
    pub show_form: bool,
    /// Bumped on reset; loads started under an older value are discarded
    pub generation: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Re-fetch the list for `filter`, replacing it wholesale.
///
/// Responses within one generation are not sequenced: the last one to arrive
/// wins. A response that lands after [`store_reset`] is dropped.
pub fn store_load_tasks(store: AppStore, client: ApiClient, filter: Filter) {
    let generation = store.generation().get_untracked();
    store.loading().set(true);
    store.error().set(None);
    spawn_local(async move {
        let result = client.list_tasks_for(filter).await;
        if let Ok(tasks) = &result {
            log::debug!("loaded {} {:?} tasks", tasks.len(), filter);
        }
        store_apply_loaded(&store, generation, result);
    });
}

/// Write a finished load into the store unless it belongs to an earlier
/// generation. Returns whether it was applied.
pub fn store_apply_loaded(
    store: &AppStore,
    generation: u32,
    result: Result<Vec<Task>, ApiError>,
) -> bool {
    if store.generation().get_untracked() != generation {
        log::debug!("dropping task list from generation {generation}");
        return false;
    }
    match result {
        Ok(tasks) => store.tasks().set(tasks),
        Err(e) => store.error().set(Some(e.to_string())),
    }
    store.loading().set(false);
    true
}

/// Show an error in the banner
pub fn store_set_error(store: &AppStore, message: String) {
    store.error().set(Some(message));
}

/// Open the edit form for `task`, closing the create form
pub fn store_start_editing(store: &AppStore, task: Task) {
    store.editing().set(Some(task));
    store.show_form().set(false);
}

/// Drop everything belonging to the previous user, including loads still in
/// flight
pub fn store_reset(store: &AppStore) {
    store.generation().update(|g| *g = g.wrapping_add(1));
    store.loading().set(false);
    store.tasks().set(Vec::new());
    store.filter().set(Filter::All);
    store.error().set(None);
    store.editing().set(None);
    store.show_form().set(false);
}
