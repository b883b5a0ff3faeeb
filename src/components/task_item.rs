//! Task Item Component
//!
//! A single task row: toggle, text, timestamp, edit and delete.

use chrono::{DateTime, Local, TimeZone};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::{use_api, AppContext};
use crate::models::Task;
use crate::store::{store_set_error, store_start_editing, use_app_store};

/// `Jan 5, 2024, 03:07 PM`
pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let client = use_api();

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();
    let subject = task.title.clone();
    let description = task.visible_description().map(str::to_string);
    let created = format_timestamp(&task.created_at.with_timezone(&Local));
    let (deleting, set_deleting) = signal(false);

    let on_toggle = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn_local(async move {
                match client.toggle_task(id).await {
                    Ok(_) => ctx.reload(),
                    Err(e) => store_set_error(&store, e.to_string()),
                }
            });
        }
    };

    // Open the editor on the server's current copy, falling back to the row
    let on_edit = {
        let client = client.clone();
        let task = task.clone();
        move |_| {
            let client = client.clone();
            let row = task.clone();
            spawn_local(async move {
                match client.get_task(id).await {
                    Ok(fresh) => store_start_editing(&store, fresh.unwrap_or(row)),
                    Err(e) => store_set_error(&store, e.to_string()),
                }
            });
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        let client = client.clone();
        set_deleting.set(true);
        spawn_local(async move {
            match client.delete_task(id).await {
                Ok(()) => ctx.reload(),
                Err(e) => {
                    set_deleting.set(false);
                    store_set_error(&store, e.to_string());
                }
            }
        });
    });

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" }>
            <button
                class=if completed { "toggle-btn checked" } else { "toggle-btn" }
                title=if completed { "Mark as pending" } else { "Mark as completed" }
                on:click=on_toggle
            >
                {if completed { "✓" } else { "" }}
            </button>

            <div class="task-body">
                <h3 class="task-title">{title}</h3>
                {description.map(|text| view! { <p class="task-description">{text}</p> })}
                <p class="task-created">"Created: " {created}</p>
            </div>

            <div class="task-actions">
                <button
                    class="edit-btn"
                    title="Edit task"
                    on:click=on_edit
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    subject=subject
                    disabled=deleting
                    on_confirm=on_delete
                />
            </div>
        </div>
    }
}
