//! Frontend Models
//!
//! Data structures matching the task API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// User profile (matches `/users/me/`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl User {
    /// Profile used when the real one cannot be fetched after login.
    pub fn placeholder(username: &str) -> Self {
        Self {
            id: 0,
            username: username.to_string(),
            email: String::new(),
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Only present on detail responses; the list endpoint omits it.
    #[serde(rename = "user", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

impl Task {
    /// Description for display, `None` when missing or blank.
    pub fn visible_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// List endpoints answer either with a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaskListResponse {
    Bare(Vec<Task>),
    Paginated { results: Vec<Task> },
}

impl From<TaskListResponse> for Vec<Task> {
    fn from(response: TaskListResponse) -> Self {
        match response {
            TaskListResponse::Bare(tasks) => tasks,
            TaskListResponse::Paginated { results } => results,
        }
    }
}

/// Body for `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
}

impl TaskInput {
    /// Trims both fields and rejects a blank title.
    pub fn new(title: &str, description: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
        })
    }
}

/// Body for `PATCH /tasks/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<TaskInput> for TaskPatch {
    fn from(input: TaskInput) -> Self {
        Self {
            title: Some(input.title),
            description: Some(input.description),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /login/` answers with the profile plus its token
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Which slice of the task list is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    /// List endpoint backing this filter
    pub fn endpoint(self) -> &'static str {
        match self {
            Filter::All => "/tasks/",
            Filter::Pending => "/tasks/pending/",
            Filter::Completed => "/tasks/completed/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Hint shown under "No tasks found"
    pub fn empty_hint(self) -> String {
        match self {
            Filter::All => "Create your first task to get started!".to_string(),
            other => format!("No {} tasks at the moment.", other.label().to_lowercase()),
        }
    }
}

/// Summary counts derived from the last fetched list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task_json(id: u32, completed: bool) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Task {}", id),
            "description": "",
            "completed": completed,
            "created_at": "2024-01-05T15:07:00.123456Z"
        })
    }

    #[test]
    fn test_bare_and_paginated_lists_decode_identically() {
        let bare = json!([task_json(3, false), task_json(1, true), task_json(2, false)]);
        let wrapped = json!({ "count": 3, "next": null, "previous": null, "results": bare.clone() });

        let from_bare: Vec<Task> = serde_json::from_value::<TaskListResponse>(bare).unwrap().into();
        let from_wrapped: Vec<Task> = serde_json::from_value::<TaskListResponse>(wrapped).unwrap().into();

        assert_eq!(from_bare, from_wrapped);
        let ids: Vec<u32> = from_bare.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_task_detail_carries_owner() {
        let mut value = task_json(7, false);
        value["user"] = json!({ "id": 4, "username": "ana", "email": "ana@example.com" });
        value["description"] = serde_json::Value::Null;

        let task: Task = serde_json::from_value(value).unwrap();
        assert_eq!(task.owner.as_ref().map(|u| u.id), Some(4));
        assert_eq!(task.description, None);
        assert_eq!(task.visible_description(), None);
    }

    #[test]
    fn test_task_input_rejects_blank_titles() {
        assert_eq!(TaskInput::new("", "notes"), Err(ValidationError::EmptyTitle));
        assert_eq!(TaskInput::new(" \t\n ", ""), Err(ValidationError::EmptyTitle));

        let input = TaskInput::new("  Buy milk ", "  2 litres ").unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description, "2 litres");
    }

    #[test]
    fn test_task_patch_skips_missing_fields() {
        let patch = TaskPatch { title: Some("New".into()), description: None };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "title": "New" }));
    }

    #[test]
    fn test_login_response_flattens_profile() {
        let response: LoginResponse = serde_json::from_value(json!({
            "id": 2, "username": "bob", "email": "bob@example.com", "token": "abc123"
        }))
        .unwrap();
        assert_eq!(response.user.username, "bob");
        assert_eq!(response.token, "abc123");
    }

    #[test]
    fn test_filter_endpoints_and_hints() {
        assert_eq!(Filter::default(), Filter::All);
        assert_eq!(Filter::Pending.endpoint(), "/tasks/pending/");
        assert_eq!(Filter::Completed.endpoint(), "/tasks/completed/");
        assert_eq!(Filter::Completed.empty_hint(), "No completed tasks at the moment.");
    }

    #[test]
    fn test_stats_from_tasks() {
        let tasks: Vec<Task> = [task_json(1, true), task_json(2, false), task_json(3, false)]
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();

        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats, TaskStats { total: 3, pending: 2, completed: 1 });
        assert_eq!(TaskStats::from_tasks(&[]), TaskStats::default());
    }
}
