//! HttpOracleApi against a local stub of the oracle API

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use l3mbda_server::api::{ApiError, CreateOracleRequest, HttpOracleApi, OracleApi};
use l3mbda_server::models::{Credential, EventKind, Filter, FilterKey};

#[derive(Clone, Default)]
struct Stub {
    seen: Arc<Mutex<Vec<(String, Option<String>, Option<Value>)>>>,
}

impl Stub {
    fn record(&self, call: &str, headers: &HeaderMap, body: Option<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.seen.lock().unwrap().push((call.to_string(), auth, body));
    }
}

async fn create(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    stub.record("create", &headers, Some(body.clone()));
    if body["name"] == "rejected" {
        return Json(json!({"serverError": "Invalid address"}));
    }
    Json(json!({"id": "42", "emoji": "🦊"}))
}

async fn remove(State(stub): State<Stub>, headers: HeaderMap, Path(id): Path<String>) -> StatusCode {
    stub.record(&format!("delete {id}"), &headers, None);
    if id == "missing" {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn logs(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    stub.record(&format!("logs {id}"), &headers, None);
    if id == "broken" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(json!({
        "logs": [
            {"createdAt": "2024-05-01T10:00:00Z", "payload": {"from": "0xA", "amount": 5}},
            {"createdAt": "2024-05-01T10:01:00Z"}
        ]
    })))
}

async fn spawn_stub() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .route("/api/oracles", post(create))
        .route("/api/oracles/:id", delete(remove))
        .route("/api/oracles/:id/logs", get(logs))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Trailing slash is trimmed by the client.
    (format!("http://{addr}/"), stub)
}

fn token() -> Credential {
    Credential::parse("secret").unwrap()
}

#[tokio::test]
async fn create_sends_bearer_token_and_body() {
    let (base, stub) = spawn_stub().await;
    let api = HttpOracleApi::new(base);

    let request = CreateOracleRequest::new(
        "My Metamask Oracle",
        EventKind::Erc20Transfer,
        vec![
            Filter::new(FilterKey::From, "0xA"),
            Filter::new(FilterKey::To, "0xB"),
        ],
    );
    let created = api.create_oracle(&token(), &request).await.unwrap();
    assert_eq!(created.id, "42");
    assert_eq!(created.emoji, "🦊");

    let seen = stub.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].1.as_deref(), Some("Bearer secret"));
    assert_eq!(
        seen[0].2,
        Some(json!({
            "name": "My Metamask Oracle",
            "event": "erc20-transfer",
            "filters": [
                {"type": "from", "value": "0xA"},
                {"type": "to", "value": "0xB"}
            ],
            "action": "metamask"
        }))
    );
}

#[tokio::test]
async fn create_surfaces_server_error() {
    let (base, _stub) = spawn_stub().await;
    let api = HttpOracleApi::new(base);

    let request = CreateOracleRequest::new("rejected", EventKind::EthTransfer, Vec::new());
    let err = api.create_oracle(&token(), &request).await.unwrap_err();
    assert!(matches!(err, ApiError::Server(message) if message == "Invalid address"));
}

#[tokio::test]
async fn delete_checks_status() {
    let (base, stub) = spawn_stub().await;
    let api = HttpOracleApi::new(base);

    api.delete_oracle(&token(), "7").await.unwrap();
    let err = api.delete_oracle(&token(), "missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 404));

    let calls: Vec<String> = stub.seen.lock().unwrap().iter().map(|c| c.0.clone()).collect();
    assert_eq!(calls, ["delete 7", "delete missing"]);
}

#[tokio::test]
async fn logs_are_parsed_into_notifications() {
    let (base, _stub) = spawn_stub().await;
    let api = HttpOracleApi::new(base);

    let logs = api.fetch_logs(&token(), "7").await.unwrap();
    assert_eq!(logs.len(), 2);

    let notifications: Vec<_> = logs
        .into_iter()
        .map(|log| log.into_notification(EventKind::Erc20Transfer))
        .collect();
    assert_eq!(notifications[0].event, "ERC20 Transfer");
    assert_eq!(notifications[0].created_at, "2024-05-01T10:00:00Z");
    let payload = notifications[0].payload.as_ref().unwrap();
    assert_eq!(payload["from"], "0xA");
    assert_eq!(payload["amount"], "5");
    assert!(notifications[1].payload.is_none());

    let err = api.fetch_logs(&token(), "broken").await.unwrap_err();
    assert!(matches!(err, ApiError::Status(_)));
}
