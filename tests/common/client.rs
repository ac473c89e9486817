//! HTTP client for end-to-end tests
//!
//! When routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// POST /chat with an arbitrary JSON body
    pub async fn chat_with_body(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Chat request failed")
    }

    /// POST /chat with just a message
    pub async fn chat(&self, message: &str) -> Response {
        self.chat_with_body(json!({ "message": message })).await
    }

    /// POST /chat and return the parsed body, asserting a 200
    pub async fn chat_json(&self, message: &str) -> Value {
        let response = self.chat(message).await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::OK,
            "chat {:?} failed",
            message
        );
        response.json().await.expect("Chat response is not JSON")
    }

    pub async fn get_tools(&self) -> Response {
        self.get("/tools").await
    }

    pub async fn get_health(&self) -> Response {
        self.get("/health").await
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }
}
