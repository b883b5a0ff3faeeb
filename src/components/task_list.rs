//! Task List Component
//!
//! Spinner, empty state, or one row per task.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    move || {
        if store.loading().get() {
            view! { <div class="spinner-row"><div class="spinner small"></div></div> }.into_any()
        } else if store.tasks().with(|tasks| tasks.is_empty()) {
            let hint = store.filter().get().empty_hint();
            view! {
                <div class="empty-state">
                    <p class="empty-title">"No tasks found"</p>
                    <p class="empty-hint">{hint}</p>
                </div>
            }.into_any()
        } else {
            view! {
                <div class="task-list">
                    <For
                        each=move || store.tasks().get()
                        // Rows are rebuilt when a re-fetch changes their content
                        key=|task| (task.id, task.completed, task.title.clone(), task.description.clone())
                        children=move |task| view! { <TaskItem task=task /> }
                    />
                </div>
            }.into_any()
        }
    }
}
