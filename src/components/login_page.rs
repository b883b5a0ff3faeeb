//! Login Page Component
//!
//! Sign-in form with a switch to account registration.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginMode {
    SignIn,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (mode, set_mode) = signal(LoginMode::SignIn);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let current = mode.get_untracked();
        let name = username.get_untracked().trim().to_string();
        let mail = email.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        if name.is_empty() || pass.is_empty() || (current == LoginMode::Register && mail.is_empty()) {
            set_error.set(Some(match current {
                LoginMode::SignIn => "Please provide both username and password".to_string(),
                LoginMode::Register => "Please provide username, email, and password".to_string(),
            }));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = match current {
                LoginMode::SignIn => auth.sign_in(&name, &pass).await,
                LoginMode::Register => auth.register(&name, &mail, &pass).await,
            };
            // On success this page is already gone
            if let Err(e) = result {
                set_error.set(Some(e.to_string()));
                set_submitting.set(false);
            }
        });
    };

    let switch_mode = move |_| {
        set_error.set(None);
        set_mode.update(|m| {
            *m = if *m == LoginMode::SignIn { LoginMode::Register } else { LoginMode::SignIn };
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1 class="app-title">"Task Manager"</h1>
                <h2>{move || if mode.get() == LoginMode::SignIn { "Sign in" } else { "Create account" }}</h2>

                {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}

                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

                <Show when=move || mode.get() == LoginMode::Register>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </Show>

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || match (submitting.get(), mode.get()) {
                        (true, _) => "Please wait...",
                        (false, LoginMode::SignIn) => "Sign in",
                        (false, LoginMode::Register) => "Register",
                    }}
                </button>

                <button type="button" class="link-btn" on:click=switch_mode>
                    {move || if mode.get() == LoginMode::SignIn {
                        "No account yet? Register"
                    } else {
                        "Already registered? Sign in"
                    }}
                </button>
            </form>
        </div>
    }
}
