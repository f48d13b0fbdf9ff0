//! OpenAI chat completions HTTP client.

use crate::error::OpenAiError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// OpenAI chat completions client.
///
/// The API key is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
    params: CompletionParams,
}

impl OpenAiClient {
    /// Create a new client. `timeout` bounds every request made by it.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        params: CompletionParams,
        timeout: Duration,
    ) -> Result<Self, OpenAiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key.into()),
            params,
        })
    }

    /// Get the configured model name.
    pub fn model(&self) -> &str {
        &self.params.model
    }

    /// Send a single chat completion request.
    ///
    /// Returns the trimmed content of the first choice; an empty string when
    /// the API answered successfully but produced no content.
    #[instrument(skip(self, messages), fields(message_count = messages.len(), model = %self.params.model))]
    pub async fn chat(&self, messages: Vec<Message>) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: self.params.model.clone(),
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let chat_response = self.handle_response::<ChatResponse>(response).await?;
        if let Some(usage) = &chat_response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        Ok(chat_response.first_content())
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, OpenAiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            debug!("Response body: {}", truncate(&body, 200));
            serde_json::from_str(&body).map_err(OpenAiError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(status = status.as_u16(), "Completion request rejected: {}", truncate(&message, 200));
            Err(OpenAiError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
