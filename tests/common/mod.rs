//! In-process mock backend for integration tests.
//!
//! Every POST is recorded as `(path, body)`; responses are scripted per path.
//! Paths are matched after stripping the `/api` prefix, so scripts use the
//! same paths as the sub-clients (`/Group/create`, ...).

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use challenge_sdk::client::ChallengeClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// One request received by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<String, (u16, Value)>>>,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: MockState,
}

#[allow(dead_code)]
impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");

        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn client(&self) -> ChallengeClient {
        ChallengeClient::new(&self.base_url()).expect("client for mock backend")
    }

    /// Answer `path` with 200 and `body`. `Value::Null` sends an empty body.
    pub fn respond(&self, path: &str, body: Value) {
        self.respond_with(path, 200, body);
    }

    pub fn respond_with(&self, path: &str, status: u16, body: Value) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Recorded> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    /// Body of the most recent request to `path`.
    pub fn last_body(&self, path: &str) -> Option<Value> {
        self.calls_to(path).pop().map(|c| c.body)
    }
}

async fn handle(State(state): State<MockState>, uri: Uri, body: String) -> impl IntoResponse {
    let path = uri
        .path()
        .strip_prefix("/api")
        .unwrap_or(uri.path())
        .to_string();
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    state.calls.lock().unwrap().push(Recorded {
        path: path.clone(),
        body,
    });

    let (status, payload) = state
        .routes
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or((404, json!({"error": format!("no route for {}", path)})));

    let text = if payload.is_null() {
        String::new()
    } else {
        payload.to_string()
    };

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        text,
    )
}

/// Script a successful login returning `user` and `token`.
#[allow(dead_code)]
pub fn script_login(mock: &MockBackend, user: &str, token: &str) {
    mock.respond(
        "/UserAuthentication/login",
        json!({"user": user, "session": token}),
    );
}
