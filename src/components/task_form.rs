//! Task Form Component
//!
//! Create and edit form. Blank titles are rejected before any request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_api;
use crate::models::Task;

/// Form for creating a task, or editing `initial` when given
#[component]
pub fn TaskForm(
    #[prop(optional)] initial: Option<Task>,
    #[prop(into)] on_done: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let client = use_api();

    let editing_id = initial.as_ref().map(|task| task.id);
    let is_editing = editing_id.is_some();
    let (title, set_title) = signal(initial.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        initial.as_ref().and_then(|t| t.description.clone()).unwrap_or_default(),
    );
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_submitting.set(true);

        let client = client.clone();
        let title_value = title.get_untracked();
        let description_value = description.get_untracked();
        spawn_local(async move {
            match client.submit_task(editing_id, &title_value, &description_value).await {
                Ok(saved) => {
                    match saved {
                        Some(task) => log::debug!("saved task {}", task.id),
                        None => log::debug!("saved task, server returned no body"),
                    }
                    if !is_editing {
                        set_title.set(String::new());
                        set_description.set(String::new());
                    }
                    set_submitting.set(false);
                    on_done.run(());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <h2>{if is_editing { "Edit Task" } else { "Create New Task" }}</h2>

            {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}

            <label for="task-title">"Title *"</label>
            <input
                id="task-title"
                type="text"
                placeholder="Enter task title..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <label for="task-description">"Description"</label>
            <textarea
                id="task-description"
                rows="3"
                placeholder="Enter task description (optional)..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <div class="form-actions">
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || match (submitting.get(), is_editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Task",
                        (false, false) => "Add Task",
                    }}
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
