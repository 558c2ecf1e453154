//! In-process stand-in for the session API, used by native transport tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::config::ClientConfig;

pub(crate) const SESSION_COOKIE: &str = "session=vault-test";
pub(crate) const VALID_USER: &str = "alice";
pub(crate) const VALID_PASSWORD: &str = "wonderland";

pub(crate) struct MockServer {
    pub base_url: String,
    identity_hits: Arc<AtomicUsize>,
}

impl MockServer {
    pub(crate) fn config(&self) -> ClientConfig {
        ClientConfig { api_base_url: self.base_url.clone(), ..ClientConfig::default() }
    }

    pub(crate) fn identity_hits(&self) -> usize {
        self.identity_hits.load(Ordering::SeqCst)
    }
}

pub(crate) async fn spawn_mock_server() -> MockServer {
    let identity_hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/home", get(home))
        .route("/slow", get(slow))
        .route("/garbled", get(garbled))
        .route("/nameless", get(nameless))
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/reset-password", post(reset_password))
        .with_state(identity_hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock server should bind");
    let addr = listener.local_addr().expect("mock server should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server should run");
    });

    MockServer { base_url: format!("http://{addr}"), identity_hits }
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .any(|pair| pair.trim() == SESSION_COOKIE)
}

fn reply(status: StatusCode, outcome: &str, message: &str) -> Response {
    (status, Json(json!({"status": outcome, "message": message}))).into_response()
}

async fn home(State(hits): State<Arc<AtomicUsize>>, headers: HeaderMap) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    if has_session(&headers) {
        Json(json!({"message": format!("Welcome {VALID_USER}!")})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "Not logged in"}))).into_response()
    }
}

async fn slow() -> Response {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({"message": "Welcome late"})).into_response()
}

async fn garbled() -> Response {
    (StatusCode::OK, "<html>maintenance</html>").into_response()
}

async fn nameless() -> Response {
    Json(json!({"message": "Hello"})).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == VALID_USER && body["password"] == VALID_PASSWORD {
        let mut resp = reply(StatusCode::OK, "success", "Login successful!");
        resp.headers_mut().insert(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}; Path=/; HttpOnly")
                .parse()
                .expect("cookie header should parse"),
        );
        resp
    } else {
        reply(StatusCode::UNAUTHORIZED, "failure", "Username or password incorrect.")
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return reply(StatusCode::CONFLICT, "failure", "Username already taken");
    }
    if body.get("firstName").is_none() || body.get("confirmedPassword").is_none() {
        return (StatusCode::BAD_REQUEST, "missing fields").into_response();
    }
    reply(StatusCode::CREATED, "success", "Account created!")
}

async fn reset_password(Json(body): Json<Value>) -> Response {
    if body["email_or_username"] == "ghost" {
        return reply(StatusCode::NOT_FOUND, "failure", "User not found.");
    }
    reply(StatusCode::OK, "success", "Password reset successful!")
}
