//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the fake review API serves statuses on.
pub const STATUS_PATH: &str = "/api/user_api/homework_statuses/";

/// Bot token used against the fake Telegram server.
pub const BOT_TOKEN: &str = "123:abc";

/// Path of `sendMessage` for [`BOT_TOKEN`].
pub const SEND_MESSAGE_PATH: &str = "/bot123:abc/sendMessage";

/// Full status endpoint on `server`.
pub fn status_endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), STATUS_PATH)
}

/// Reply with a single homework record.
pub fn single_homework(name: &str, status: &str, current_date: i64) -> Value {
    json!({
        "homeworks": [{"homework_name": name, "status": status}],
        "current_date": current_date
    })
}

/// Mounts a `sendMessage` handler that accepts anything.
pub async fn mount_telegram_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})),
        )
        .mount(server)
        .await;
}

/// Texts posted to `sendMessage` so far.
pub async fn sent_texts(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == SEND_MESSAGE_PATH)
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["text"].as_str().unwrap().to_string()
        })
        .collect()
}
