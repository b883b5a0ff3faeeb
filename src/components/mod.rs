//! UI Components
//!
//! Leptos components for the task page and the login screen.

mod header;
mod stats_bar;
mod filter_bar;
mod task_form;
mod task_item;
mod task_list;
mod login_page;
mod delete_confirm_button;

pub use header::Header;
pub use stats_bar::StatsBar;
pub use filter_bar::FilterBar;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use login_page::LoginPage;
pub use delete_confirm_button::DeleteConfirmButton;
