//! Stateful in-memory stand-in for the organization admin API
//!
//! Mounted as a catch-all wiremock responder: it keeps invites, projects,
//! project API keys, service accounts, project members and users in memory
//! and serves them with cursor pagination using a configurable server-side
//! page size.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use oaiadmin::{AdminClient, ClientConfig};

pub const CREATED_AT: i64 = 1700000000;

#[derive(Default)]
struct State {
    invites: Vec<Value>,
    projects: Vec<Value>,
    api_keys: BTreeMap<String, Vec<Value>>,
    service_accounts: BTreeMap<String, Vec<Value>>,
    project_users: BTreeMap<String, Vec<Value>>,
    users: Vec<Value>,
    next_id: u64,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{:04}", prefix, self.next_id)
    }

    fn has_project(&self, id: &str) -> bool {
        self.projects.iter().any(|p| p["id"] == id)
    }

    fn create_service_account(&mut self, project_id: &str, name: &str) -> (Value, Value) {
        let id = self.next_id("svc_acct_");
        let key_id = self.next_id("key_");
        let account = json!({
            "object": "organization.project.service_account",
            "id": id,
            "name": name,
            "role": "member",
            "created_at": CREATED_AT
        });
        self.service_accounts
            .entry(project_id.to_string())
            .or_default()
            .push(account.clone());
        let api_key = json!({
            "object": "organization.project.service_account.api_key",
            "id": key_id,
            "name": "Secret Key",
            "value": format!("sk-svcacct-{}", key_id),
            "created_at": CREATED_AT
        });
        (account, api_key)
    }

    fn add_project_user(&mut self, project_id: &str, user_id: &str, role: &Value) -> ResponseTemplate {
        let Some(user) = self.users.iter().find(|u| u["id"] == user_id).cloned() else {
            return not_found();
        };
        let members = self
            .project_users
            .entry(project_id.to_string())
            .or_default();
        if members.iter().any(|m| m["id"] == user_id) {
            return error(400, "User is already a member of this project");
        }
        let member = json!({
            "object": "organization.project.user",
            "id": user_id,
            "name": user["name"].clone(),
            "email": user["email"].clone(),
            "role": role.clone(),
            "added_at": CREATED_AT + 10
        });
        members.push(member.clone());
        ResponseTemplate::new(200).set_body_json(member)
    }
}

/// Fake admin API backend
#[derive(Clone)]
pub struct FakeOrg {
    state: Arc<Mutex<State>>,
    page_size: usize,
}

impl FakeOrg {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            page_size,
        }
    }

    /// Start a mock server backed by this fake and return a client for it
    pub async fn start(&self) -> (MockServer, AdminClient) {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(self.clone())
            .mount(&server)
            .await;
        let client = AdminClient::new(ClientConfig::new("sk-admin-test", server.uri()));
        (server, client)
    }

    pub fn seed_user(&self, email: &str, role: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("user_");
        state.users.push(json!({
            "object": "organization.user",
            "id": id,
            "name": email.split('@').next().unwrap_or(email),
            "email": email,
            "role": role,
            "added_at": CREATED_AT
        }));
        id
    }

    pub fn seed_project(&self, name: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("proj_");
        state.projects.push(project_json(&id, name));
        id
    }

    /// Add an API key with the given wire `owner` object
    pub fn seed_api_key(&self, project_id: &str, owner: Value) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("key_");
        let key = json!({
            "object": "organization.project.api_key",
            "id": id,
            "name": format!("key {}", id),
            "redacted_value": "sk-abc...def",
            "created_at": CREATED_AT,
            "owner": owner
        });
        state
            .api_keys
            .entry(project_id.to_string())
            .or_default()
            .push(key);
        id
    }

    pub fn seed_service_account(&self, project_id: &str, name: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let (account, _) = state.create_service_account(project_id, name);
        account["id"].as_str().unwrap_or_default().to_string()
    }

    /// Make an existing organization user a member of a project
    pub fn seed_project_user(&self, project_id: &str, user_id: &str, role: &str) {
        let mut state = self.state.lock().unwrap();
        state.add_project_user(project_id, user_id, &json!(role));
    }

    pub fn invite_count(&self) -> usize {
        self.state.lock().unwrap().invites.len()
    }

    fn page(&self, items: &[Value], request: &Request) -> ResponseTemplate {
        let mut limit = self.page_size;
        let mut after: Option<String> = None;
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "limit" => {
                    if let Ok(n) = value.parse::<usize>() {
                        limit = limit.min(n);
                    }
                }
                "after" => after = Some(value.into_owned()),
                _ => {}
            }
        }

        let start = match after {
            Some(cursor) => match items.iter().position(|item| item["id"] == cursor.as_str()) {
                Some(pos) => pos + 1,
                None => return error(400, "unknown cursor"),
            },
            None => 0,
        };
        let end = (start + limit).min(items.len());
        let data = items[start..end].to_vec();

        ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "first_id": data.first().map(|v| v["id"].clone()).unwrap_or(Value::Null),
            "last_id": data.last().map(|v| v["id"].clone()).unwrap_or(Value::Null),
            "has_more": end < items.len(),
            "data": data
        }))
    }
}

fn project_json(id: &str, name: &str) -> Value {
    json!({
        "object": "organization.project",
        "id": id,
        "name": name,
        "created_at": CREATED_AT,
        "archived_at": null,
        "status": "active"
    })
}

fn error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {"message": message, "type": "invalid_request_error"}
    }))
}

fn not_found() -> ResponseTemplate {
    error(404, "not found")
}

fn deleted(object: &str, id: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "object": object,
        "id": id,
        "deleted": true
    }))
}

fn find<'a>(items: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
    items.iter_mut().find(|item| item["id"] == id)
}

fn remove(items: &mut Vec<Value>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item["id"] != id);
    items.len() != before
}

impl Respond for FakeOrg {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let method = request.method.as_str().to_string();
        let path = request.url.path().to_string();
        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);

        let mut state = self.state.lock().unwrap();

        match (method.as_str(), segments.as_slice()) {
            ("GET", ["organization", "invites"]) => {
                let items = state.invites.clone();
                drop(state);
                self.page(&items, request)
            }
            ("POST", ["organization", "invites"]) => {
                let email = body["email"].as_str().unwrap_or_default().to_string();
                if state.invites.iter().any(|i| i["email"] == email.as_str()) {
                    return error(409, "An invite for this email already exists");
                }
                let id = state.next_id("invite-");
                let invite = json!({
                    "object": "organization.invite",
                    "id": id,
                    "email": email,
                    "role": body["role"].clone(),
                    "status": "pending",
                    "invited_at": CREATED_AT,
                    "expires_at": CREATED_AT + 7 * 24 * 3600,
                    "accepted_at": null
                });
                state.invites.push(invite.clone());
                ResponseTemplate::new(200).set_body_json(invite)
            }
            ("GET", ["organization", "invites", id]) => match find(&mut state.invites, id) {
                Some(invite) => ResponseTemplate::new(200).set_body_json(invite.clone()),
                None => not_found(),
            },
            ("DELETE", ["organization", "invites", id]) => {
                if remove(&mut state.invites, id) {
                    deleted("organization.invite.deleted", id)
                } else {
                    not_found()
                }
            }

            ("GET", ["organization", "projects"]) => {
                let items = state.projects.clone();
                drop(state);
                self.page(&items, request)
            }
            ("POST", ["organization", "projects"]) => {
                let id = state.next_id("proj_");
                let project = project_json(&id, body["name"].as_str().unwrap_or_default());
                state.projects.push(project.clone());
                ResponseTemplate::new(200).set_body_json(project)
            }
            ("GET", ["organization", "projects", id]) => match find(&mut state.projects, id) {
                Some(project) => ResponseTemplate::new(200).set_body_json(project.clone()),
                None => not_found(),
            },
            ("POST", ["organization", "projects", id]) => match find(&mut state.projects, id) {
                Some(project) => {
                    project["name"] = body["name"].clone();
                    ResponseTemplate::new(200).set_body_json(project.clone())
                }
                None => not_found(),
            },
            ("POST", ["organization", "projects", id, "archive"]) => {
                match find(&mut state.projects, id) {
                    Some(project) => {
                        project["status"] = json!("archived");
                        project["archived_at"] = json!(CREATED_AT + 60);
                        ResponseTemplate::new(200).set_body_json(project.clone())
                    }
                    None => not_found(),
                }
            }

            ("GET", ["organization", "projects", project, "api-keys"]) => {
                let items = state.api_keys.get(*project).cloned().unwrap_or_default();
                drop(state);
                self.page(&items, request)
            }
            ("GET", ["organization", "projects", project, "api-keys", id]) => {
                match state
                    .api_keys
                    .get_mut(*project)
                    .and_then(|keys| find(keys, id))
                {
                    Some(key) => ResponseTemplate::new(200).set_body_json(key.clone()),
                    None => not_found(),
                }
            }
            ("DELETE", ["organization", "projects", project, "api-keys", id]) => {
                let removed = state
                    .api_keys
                    .get_mut(*project)
                    .map(|keys| remove(keys, id))
                    .unwrap_or(false);
                if removed {
                    deleted("organization.project.api_key.deleted", id)
                } else {
                    not_found()
                }
            }

            ("GET", ["organization", "projects", project, "service_accounts"]) => {
                let items = state
                    .service_accounts
                    .get(*project)
                    .cloned()
                    .unwrap_or_default();
                drop(state);
                self.page(&items, request)
            }
            ("POST", ["organization", "projects", project, "service_accounts"]) => {
                if !state.has_project(project) {
                    return not_found();
                }
                let name = body["name"].as_str().unwrap_or_default().to_string();
                let (mut account, api_key) = state.create_service_account(project, &name);
                account["api_key"] = api_key;
                ResponseTemplate::new(200).set_body_json(account)
            }
            ("GET", ["organization", "projects", project, "service_accounts", id]) => {
                match state
                    .service_accounts
                    .get_mut(*project)
                    .and_then(|accounts| find(accounts, id))
                {
                    Some(account) => ResponseTemplate::new(200).set_body_json(account.clone()),
                    None => not_found(),
                }
            }
            ("DELETE", ["organization", "projects", project, "service_accounts", id]) => {
                let removed = state
                    .service_accounts
                    .get_mut(*project)
                    .map(|accounts| remove(accounts, id))
                    .unwrap_or(false);
                if removed {
                    deleted("organization.project.service_account.deleted", id)
                } else {
                    not_found()
                }
            }

            ("GET", ["organization", "projects", project, "users"]) => {
                let items = state
                    .project_users
                    .get(*project)
                    .cloned()
                    .unwrap_or_default();
                drop(state);
                self.page(&items, request)
            }
            ("POST", ["organization", "projects", project, "users"]) => {
                if !state.has_project(project) {
                    return not_found();
                }
                let user_id = body["user_id"].as_str().unwrap_or_default().to_string();
                state.add_project_user(project, &user_id, &body["role"])
            }
            ("GET", ["organization", "projects", project, "users", id]) => {
                match state
                    .project_users
                    .get_mut(*project)
                    .and_then(|members| find(members, id))
                {
                    Some(member) => ResponseTemplate::new(200).set_body_json(member.clone()),
                    None => not_found(),
                }
            }
            ("POST", ["organization", "projects", project, "users", id]) => {
                match state
                    .project_users
                    .get_mut(*project)
                    .and_then(|members| find(members, id))
                {
                    Some(member) => {
                        member["role"] = body["role"].clone();
                        ResponseTemplate::new(200).set_body_json(member.clone())
                    }
                    None => not_found(),
                }
            }
            ("DELETE", ["organization", "projects", project, "users", id]) => {
                let removed = state
                    .project_users
                    .get_mut(*project)
                    .map(|members| remove(members, id))
                    .unwrap_or(false);
                if removed {
                    deleted("organization.project.user.deleted", id)
                } else {
                    not_found()
                }
            }

            ("GET", ["organization", "users"]) => {
                let items = state.users.clone();
                drop(state);
                self.page(&items, request)
            }
            ("GET", ["organization", "users", id]) => match find(&mut state.users, id) {
                Some(user) => ResponseTemplate::new(200).set_body_json(user.clone()),
                None => not_found(),
            },
            ("DELETE", ["organization", "users", id]) => {
                if remove(&mut state.users, id) {
                    deleted("organization.user.deleted", id)
                } else {
                    not_found()
                }
            }

            _ => error(404, &format!("no route for {} {}", method, path)),
        }
    }
}
