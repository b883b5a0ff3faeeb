//! Test Utilities
//!
//! An in-memory task service served through wiremock, so client and session
//! tests can run full create/list/toggle/delete cycles.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::storage::MemoryStorage;

pub const USERNAME: &str = "ana";
pub const PASSWORD: &str = "correct-horse";
pub const EMAIL: &str = "ana@example.com";
pub const TOKEN: &str = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b";
const CREATED_AT: &str = "2024-01-05T15:07:00.123456Z";

/// Client against `uri` with a fresh in-memory storage
pub fn client_for(uri: &str) -> ApiClient {
    client_with_storage(uri, MemoryStorage::default())
}

pub fn client_with_storage(uri: &str, storage: MemoryStorage) -> ApiClient {
    ApiClient::new(ApiConfig::with_base_url(format!("{uri}/api")), Arc::new(storage))
}

#[derive(Default)]
struct Backend {
    tasks: Vec<Value>,
    next_id: u32,
    paginated: bool,
    profile_down: bool,
    registered: Vec<String>,
}

fn error(status: u16, field: &str, message: &str) -> ResponseTemplate {
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), json!(message));
    ResponseTemplate::new(status).set_body_json(Value::Object(body))
}

fn not_found() -> ResponseTemplate {
    error(404, "detail", "Not found.")
}

fn profile() -> Value {
    json!({ "id": 1, "username": USERNAME, "email": EMAIL })
}

impl Backend {
    fn handle(&mut self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().trim_start_matches("/api").to_string();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let method = request.method.as_str();

        match (method, segments.as_slice()) {
            ("POST", ["login"]) => return self.login(&body),
            ("POST", ["register"]) => return self.register(&body),
            _ => {}
        }

        let expected = format!("Token {TOKEN}");
        match request.headers.get("authorization").and_then(|v| v.to_str().ok()) {
            None => return error(401, "detail", "Authentication credentials were not provided."),
            Some(value) if value != expected => return error(401, "detail", "Invalid token."),
            Some(_) => {}
        }

        match (method, segments.as_slice()) {
            ("GET", ["users", "me"]) if self.profile_down => ResponseTemplate::new(503),
            ("GET", ["users", "me"]) => ResponseTemplate::new(200).set_body_json(profile()),
            ("GET", ["tasks"]) => self.list(None),
            ("GET", ["tasks", "pending"]) => self.list(Some(false)),
            ("GET", ["tasks", "completed"]) => self.list(Some(true)),
            ("POST", ["tasks"]) => self.create(&body),
            (_, ["tasks", id, rest @ ..]) => {
                let Some(index) = id.parse::<u64>().ok().and_then(|id| self.position(id)) else {
                    return not_found();
                };
                match (method, rest) {
                    ("GET", []) => self.detail(index),
                    ("PATCH", []) => {
                        for field in ["title", "description"] {
                            if let Some(value) = body.get(field) {
                                self.tasks[index][field] = value.clone();
                            }
                        }
                        self.detail(index)
                    }
                    ("DELETE", []) => {
                        self.tasks.remove(index);
                        ResponseTemplate::new(204)
                    }
                    ("POST", ["toggle"]) => {
                        let completed = self.tasks[index]["completed"].as_bool().unwrap_or(false);
                        self.tasks[index]["completed"] = json!(!completed);
                        self.detail(index)
                    }
                    _ => not_found(),
                }
            }
            _ => not_found(),
        }
    }

    fn login(&self, body: &Value) -> ResponseTemplate {
        let username = body["username"].as_str().unwrap_or_default();
        let password = body["password"].as_str().unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            return error(400, "error", "Please provide both username and password");
        }
        if username != USERNAME || password != PASSWORD {
            return error(401, "error", "Invalid username or password");
        }
        let mut response = profile();
        response["token"] = json!(TOKEN);
        ResponseTemplate::new(200).set_body_json(response)
    }

    fn register(&mut self, body: &Value) -> ResponseTemplate {
        let username = body["username"].as_str().unwrap_or_default().to_string();
        if username == USERNAME || self.registered.contains(&username) {
            return error(400, "error", "Username already exists");
        }
        self.registered.push(username.clone());
        ResponseTemplate::new(201).set_body_json(json!({
            "id": 1 + self.registered.len(),
            "username": username,
            "email": body["email"],
            "token": TOKEN,
            "message": "Registration successful",
        }))
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t["id"].as_u64() == Some(id))
    }

    fn list(&self, completed: Option<bool>) -> ResponseTemplate {
        let tasks: Vec<Value> = self
            .tasks
            .iter()
            .filter(|t| completed.map_or(true, |c| t["completed"].as_bool() == Some(c)))
            .cloned()
            .collect();
        let body = if self.paginated && completed.is_none() {
            json!({ "count": tasks.len(), "next": null, "previous": null, "results": tasks })
        } else {
            json!(tasks)
        };
        ResponseTemplate::new(200).set_body_json(body)
    }

    fn create(&mut self, body: &Value) -> ResponseTemplate {
        let title = body["title"].as_str().unwrap_or_default();
        if title.trim().is_empty() {
            return ResponseTemplate::new(400).set_body_json(json!({ "title": ["This field may not be blank."] }));
        }
        self.next_id += 1;
        self.tasks.push(json!({
            "id": self.next_id,
            "title": title,
            "description": body["description"].as_str().unwrap_or_default(),
            "completed": false,
            "created_at": CREATED_AT,
        }));
        let mut created = self.tasks[self.tasks.len() - 1].clone();
        created["user"] = profile();
        ResponseTemplate::new(201).set_body_json(created)
    }

    fn detail(&self, index: usize) -> ResponseTemplate {
        let mut task = self.tasks[index].clone();
        task["user"] = profile();
        ResponseTemplate::new(200).set_body_json(task)
    }
}

#[derive(Clone, Default)]
struct FakeApi {
    backend: Arc<Mutex<Backend>>,
}

impl Respond for FakeApi {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.backend.lock().unwrap().handle(request)
    }
}

/// Mock server backed by a stateful fake of the task API
pub struct FakeTaskServer {
    server: MockServer,
    api: FakeApi,
}

impl FakeTaskServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let api = FakeApi::default();
        Mock::given(any()).respond_with(api.clone()).mount(&server).await;
        Self { server, api }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client already holding the valid token
    pub fn authorized_client(&self) -> ApiClient {
        let client = client_for(&self.uri());
        client.set_token(Some(TOKEN));
        client
    }

    /// Wrap `GET /tasks/` in a `{results: [...]}` envelope
    pub fn set_paginated(&self, paginated: bool) {
        self.api.backend.lock().unwrap().paginated = paginated;
    }

    /// Make `GET /users/me/` fail with 503
    pub fn set_profile_down(&self, down: bool) {
        self.api.backend.lock().unwrap().profile_down = down;
    }
}
