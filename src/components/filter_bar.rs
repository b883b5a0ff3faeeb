//! Filter Bar Component
//!
//! All / Pending / Completed selector plus the "Add Task" toggle.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            <div class="filter-buttons">
                {Filter::ALL.into_iter().map(|filter| {
                    let is_active = move || store.filter().get() == filter;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store.filter().set(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <button
                class="add-task-btn"
                on:click=move |_| {
                    store.show_form().update(|shown| *shown = !*shown);
                    store.editing().set(None);
                }
            >
                "+ Add Task"
            </button>
        </div>
    }
}
