// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process fake of the ConnectHealth REST API.
//!
//! Serves `/api/v1/...` on an ephemeral localhost port, records every
//! request and keeps collections in memory. Ids are `<prefix><n>`.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use connecthealth::config::Config;
use connecthealth::AppContext;
use serde_json::{json, Map, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub const API_PREFIX: &str = "/api/v1";
pub const TIMESTAMP: &str = "2026-10-18T00:00:00Z";

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    /// Path with the API prefix stripped, e.g. `/clients/c1`
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct BackendState {
    requests: Mutex<Vec<RecordedRequest>>,
    collections: Mutex<HashMap<String, Vec<Value>>>,
    /// Statuses returned (one per request) before normal handling resumes.
    failures: Mutex<VecDeque<u16>>,
    next_id: AtomicU64,
}

pub struct FakeBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            state,
        }
    }

    pub fn config(&self) -> Config {
        Config::with_api_url(&self.base_url).unwrap()
    }

    pub fn context(&self) -> AppContext {
        AppContext::new(self.config()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Make the next requests fail with these statuses, in order.
    pub fn fail_next(&self, statuses: &[u16]) {
        self.state
            .failures
            .lock()
            .unwrap()
            .extend(statuses.iter().copied());
    }

    /// Insert a record directly, bypassing HTTP.
    pub fn seed(&self, collection: &str, record: Value) {
        self.state
            .collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }
}

fn error(status: StatusCode, message: Option<&str>) -> Response {
    match message {
        Some(msg) => (status, Json(json!({ "message": msg }))).into_response(),
        None => status.into_response(),
    }
}

fn auth_payload(user: Value, access: &str, refresh: &str) -> Value {
    json!({
        "data": {
            "user": user,
            "tokens": { "accessToken": access, "refreshToken": refresh, "expiresIn": 3600 }
        }
    })
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();
    let body: Option<Value> = serde_json::from_slice(&body).ok();
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: body.clone(),
    });

    if let Some(status) = state.failures.lock().unwrap().pop_front() {
        return error(StatusCode::from_u16(status).unwrap(), None);
    }

    let body = body.unwrap_or(Value::Null);
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["auth", "login"]) => {
            if body["password"] == "wrong" {
                return error(StatusCode::UNAUTHORIZED, Some("Invalid credentials"));
            }
            if body["email"] == "boom@example.com" {
                return error(StatusCode::INTERNAL_SERVER_ERROR, None);
            }
            Json(auth_payload(json!({ "id": "u1", "name": "Ann" }), "AT", "RT")).into_response()
        }
        ("POST", ["auth", "register"]) => {
            if body["email"] == "taken@example.com" {
                return error(StatusCode::CONFLICT, None);
            }
            let user = json!({ "id": "u2", "name": body["name"] });
            Json(auth_payload(user, "AT-new", "RT-new")).into_response()
        }
        ("POST", ["auth", "refresh"]) => {
            if body["refreshToken"] != "RT" {
                return error(StatusCode::UNAUTHORIZED, Some("Refresh token revoked"));
            }
            Json(json!({
                "data": {
                    "tokens": { "accessToken": "AT2", "refreshToken": "RT2", "expiresIn": 3600 }
                }
            }))
            .into_response()
        }
        ("GET", ["plans", plan_id, "exercises"]) => {
            let collections = state.collections.lock().unwrap();
            let list: Vec<Value> = collections
                .get("exercises")
                .into_iter()
                .flatten()
                .filter(|e| e["planId"] == *plan_id)
                .cloned()
                .collect();
            Json(Value::Array(list)).into_response()
        }
        ("POST", ["plans", plan_id, "exercises"]) => {
            let mut record = body;
            record["planId"] = json!(plan_id);
            (StatusCode::CREATED, Json(insert(&state, "exercises", "e", record)))
                .into_response()
        }
        (_, [collection @ ("clients" | "plans")]) => {
            collection_route(&state, method.as_str(), collection, None, body)
        }
        (_, [collection @ ("clients" | "plans"), id]) => {
            collection_route(&state, method.as_str(), collection, Some(*id), body)
        }
        _ => error(StatusCode::NOT_FOUND, Some("No such route")),
    }
}

fn insert(state: &BackendState, collection: &str, prefix: &str, mut record: Value) -> Value {
    let n = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    record["id"] = json!(format!("{}{}", prefix, n));
    record["createdAt"] = json!(TIMESTAMP);
    record["updatedAt"] = json!(TIMESTAMP);

    state
        .collections
        .lock()
        .unwrap()
        .entry(collection.to_string())
        .or_default()
        .push(record.clone());
    record
}

fn collection_route(
    state: &BackendState,
    method: &str,
    collection: &str,
    id: Option<&str>,
    body: Value,
) -> Response {
    match (method, id) {
        ("GET", None) => {
            let collections = state.collections.lock().unwrap();
            let list = collections.get(collection).cloned().unwrap_or_default();
            Json(Value::Array(list)).into_response()
        }
        ("POST", None) => {
            let prefix = &collection[..1];
            (StatusCode::CREATED, Json(insert(state, collection, prefix, body))).into_response()
        }
        (_, Some(id)) => {
            let mut collections = state.collections.lock().unwrap();
            let list = collections.entry(collection.to_string()).or_default();
            let Some(pos) = list.iter().position(|r| r["id"] == id) else {
                return error(StatusCode::NOT_FOUND, Some("Not found"));
            };

            match method {
                "GET" => Json(list[pos].clone()).into_response(),
                "PUT" => {
                    let patch: Map<String, Value> = body.as_object().cloned().unwrap_or_default();
                    let record = &mut list[pos];
                    for (key, value) in patch {
                        record[key.as_str()] = value;
                    }
                    record["updatedAt"] = json!("2026-10-19T00:00:00Z");
                    Json(record.clone()).into_response()
                }
                "DELETE" => {
                    list.remove(pos);
                    StatusCode::NO_CONTENT.into_response()
                }
                _ => error(StatusCode::METHOD_NOT_ALLOWED, None),
            }
        }
        _ => error(StatusCode::METHOD_NOT_ALLOWED, None),
    }
}
