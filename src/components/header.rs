//! Header Component
//!
//! App title, greeting and logout.

use leptos::prelude::*;

use crate::context::use_auth;
use crate::store::{store_reset, use_app_store};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();

    let on_logout = move |_| {
        auth.logout();
        store_reset(&store);
    };

    view! {
        <header class="app-header">
            <div class="app-header-inner">
                <h1 class="app-title">"Task Manager"</h1>
                {move || auth.user().map(|user| view! {
                    <div class="header-user">
                        <span class="welcome">
                            "Welcome, " <span class="username">{user.username}</span>
                        </span>
                        <button class="logout-btn" on:click=on_logout>"Logout"</button>
                    </div>
                })}
            </div>
        </header>
    }
}
