//! Stats Bar Component
//!
//! Total / pending / completed counts of the last fetched list.

use leptos::prelude::*;

use crate::models::TaskStats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.tasks().with(|tasks| TaskStats::from_tasks(tasks)));

    view! {
        <div class="stats-bar">
            <div class="stat-card total">
                <p class="stat-label">"Total Tasks"</p>
                <p class="stat-value">{move || stats.get().total}</p>
            </div>
            <div class="stat-card pending">
                <p class="stat-label">"Pending"</p>
                <p class="stat-value">{move || stats.get().pending}</p>
            </div>
            <div class="stat-card completed">
                <p class="stat-label">"Completed"</p>
                <p class="stat-value">{move || stats.get().completed}</p>
            </div>
        </div>
    }
}
