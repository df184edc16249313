//! HostNotifier wire shapes against a local host callback stub

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};

use l3mbda_server::notifier::{HostNotifier, NotificationChannel, Notifier};
use l3mbda_server::ui::views;

type Received = Arc<Mutex<Vec<Value>>>;

async fn receive(State(received): State<Received>, Json(body): Json<Value>) {
    received.lock().unwrap().push(body);
}

async fn spawn_host() -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/notify", post(receive))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/notify"), received)
}

#[tokio::test]
async fn alerts_are_posted_with_channel_and_message() {
    let (url, received) = spawn_host().await;
    let notifier = HostNotifier::new(url);

    notifier
        .notify(NotificationChannel::InApp, "Y just triggered!")
        .await;
    notifier
        .notify(NotificationChannel::Native, "Y just triggered!")
        .await;

    assert_eq!(
        *received.lock().unwrap(),
        vec![
            json!({"type": "inApp", "message": "Y just triggered!"}),
            json!({"type": "native", "message": "Y just triggered!"}),
        ]
    );
}

#[tokio::test]
async fn dialogs_are_posted_as_alert_content() {
    let (url, received) = spawn_host().await;
    let notifier = HostNotifier::new(url);
    let dialog = views::connected_dialog();

    notifier.dialog(dialog.clone()).await;

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["type"], "alert");
    assert_eq!(received[0]["content"], serde_json::to_value(&dialog).unwrap());
    assert_eq!(received[0]["content"]["type"], "panel");
}

#[tokio::test]
async fn unreachable_host_is_not_an_error() {
    // Nothing listens on port 1.
    let notifier = HostNotifier::new("http://127.0.0.1:1/notify");

    notifier
        .notify(NotificationChannel::InApp, "Y just triggered!")
        .await;
    notifier.dialog(views::connected_dialog()).await;
}
