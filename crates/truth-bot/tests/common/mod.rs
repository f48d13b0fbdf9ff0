//! Common test utilities for integration tests.

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use ed25519_dalek::{Signer, SigningKey};
use std::time::Duration;
use tower::ServiceExt;
use truth_bot::{
    api::{create_router, AppState},
    config::{Config, DiscordConfig, LogConfig, OpenAiConfig, ServerConfig},
};
use wiremock::MockServer;

pub const TIMESTAMP: &str = "1700000000";

/// Router wired to mock OpenAI and Discord servers.
pub struct TestApp {
    pub app: Router,
    pub signing_key: SigningKey,
    pub openai: MockServer,
    pub discord: MockServer,
}

pub fn test_config(public_key: &str, api_key: &str, openai: &str, discord: &str) -> Config {
    Config {
        discord: DiscordConfig {
            public_key: public_key.into(),
            api_url: discord.into(),
            timeout: Duration::from_secs(5),
        },
        openai: OpenAiConfig {
            api_key: api_key.into(),
            base_url: openai.into(),
            timeout: Duration::from_secs(5),
            ..OpenAiConfig::default()
        },
        server: ServerConfig::default(),
        log: LogConfig::default(),
    }
}

pub async fn spawn_app() -> TestApp {
    let signing_key = SigningKey::from_bytes(&[42u8; 32]);
    let public_key = hex::encode(signing_key.verifying_key().to_bytes());

    let openai = MockServer::start().await;
    let discord = MockServer::start().await;

    let config = test_config(&public_key, "sk-test", &openai.uri(), &discord.uri());
    let app = create_router(AppState::from_config(&config).unwrap());

    TestApp {
        app,
        signing_key,
        openai,
        discord,
    }
}

impl TestApp {
    /// POST `/` with a valid signature over `body`.
    pub fn signed_request(&self, body: &str) -> Request<Body> {
        let message = [TIMESTAMP.as_bytes(), body.as_bytes()].concat();
        let signature = hex::encode(self.signing_key.sign(&message).to_bytes());

        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .header("x-signature-ed25519", signature)
            .header("x-signature-timestamp", TIMESTAMP)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Wait until `server` has seen at least `count` requests.
pub async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<wiremock::Request> {
    for _ in 0..100 {
        let received = server.received_requests().await.unwrap_or_default();
        if received.len() >= count {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("timed out waiting for {} requests", count);
}

/// `content` fields of the follow-up messages received so far.
pub fn followup_contents(requests: &[wiremock::Request]) -> Vec<String> {
    requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["content"].as_str().unwrap().to_string()
        })
        .collect()
}
