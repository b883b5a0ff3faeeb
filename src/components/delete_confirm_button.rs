//! Delete Confirm Button Component
//!
//! Two-step delete: the first click asks, the second deletes.

use leptos::prelude::*;

/// Prompt text for deleting `subject`
pub fn confirm_prompt(subject: &str) -> String {
    format!("Delete \"{}\"?", subject.trim())
}

/// Inline delete confirmation for one task.
///
/// `disabled` blocks the confirm action while a delete is in flight.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] subject: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = confirm_prompt(&subject);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        title="Yes, delete"
                        disabled=move || disabled.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" title="Keep task" on:click=move |_| set_asking.set(false)>
                        "No"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" title="Delete task" on:click=move |_| set_asking.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}
