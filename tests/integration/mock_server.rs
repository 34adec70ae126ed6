//! Mock HTTP server setup for integration tests

use coffeehouse::{Api, LydiaAi};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const ACCESS_KEY: &str = "test-access-key";
pub const REQUEST_ID: &str = "req-0001";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Base client pointed at the mock server.
    pub fn api(&self) -> Api {
        Api::builder()
            .access_key(ACCESS_KEY)
            .endpoint(&self.base_url)
            .build()
            .expect("failed to build api client")
    }

    /// Lydia client pointed at the mock server.
    pub fn lydia(&self) -> LydiaAi {
        LydiaAi::from_api(self.api())
    }

    /// Expect a form POST to `path` carrying `fields` and answer with `{"payload": payload}`.
    pub async fn mock_payload(&self, path: &str, fields: &[(&str, &str)], payload: Value) -> Mock {
        let body = serde_json::json!({ "payload": payload }).to_string();
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/{}", path).as_str())
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(form_matcher(fields))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-request-id", REQUEST_ID)
            .with_body(body)
            .create_async()
            .await
    }

    /// Answer any POST to `path` with the given status and raw body.
    pub async fn mock_raw(
        &self,
        path: &str,
        status: usize,
        body: &str,
        request_id: Option<&str>,
    ) -> Mock {
        let mut server = self.server.lock().await;
        let mut mock = server
            .mock("POST", format!("/{}", path).as_str())
            .with_status(status)
            .with_body(body);
        if let Some(id) = request_id {
            mock = mock.with_header("x-request-id", id);
        }
        mock.create_async().await
    }
}

/// Match a url-encoded body containing every field in `fields`.
pub fn form_matcher(fields: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        fields
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

pub fn session_payload(id: &str, language: &str, available: bool) -> Value {
    serde_json::json!({
        "session_id": id,
        "language": language,
        "available": available,
        "expires": 1999999999
    })
}
