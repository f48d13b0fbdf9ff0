//! Discord follow-up webhook client.

use crate::chunk::{split_message, MESSAGE_LIMIT};
use crate::error::DiscordError;
use crate::types::FollowupMessage;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Content sent when there is nothing else to say.
pub const EMPTY_ANSWER: &str = "No answer.";

/// Discord REST client for interaction follow-ups.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    api_url: String,
}

impl DiscordClient {
    /// Create a new Discord client. `timeout` bounds every request made by it.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, DiscordError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Follow-up webhook URL for one interaction.
    pub fn followup_url(&self, application_id: &str, token: &str) -> String {
        format!(
            "{}/webhooks/{}/{}",
            self.api_url,
            encode(application_id),
            encode(token)
        )
    }

    /// Post a single follow-up message.
    #[instrument(skip(self, token, content), fields(len = content.len()))]
    pub async fn send_followup(
        &self,
        application_id: &str,
        token: &str,
        content: &str,
    ) -> Result<(), DiscordError> {
        let response = self
            .client
            .post(self.followup_url(application_id, token))
            .json(&FollowupMessage { content })
            .send()
            .await
            // The URL embeds the interaction token.
            .map_err(|e| DiscordError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Follow-up rejected: {}", message);
            return Err(DiscordError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    /// Deliver `text` as one or more follow-up messages, in order.
    ///
    /// The text is trimmed and replaced by [`EMPTY_ANSWER`] when nothing is
    /// left, then split at [`MESSAGE_LIMIT`] characters. Each segment is
    /// awaited before the next is sent; the first failure stops delivery.
    /// Returns the number of segments sent.
    #[instrument(skip(self, token, text))]
    pub async fn deliver(
        &self,
        application_id: &str,
        token: &str,
        text: &str,
    ) -> Result<usize, DiscordError> {
        let text = match text.trim() {
            "" => EMPTY_ANSWER,
            trimmed => trimmed,
        };

        let chunks = split_message(text, MESSAGE_LIMIT);
        let total = chunks.len();
        for (i, chunk) in chunks.into_iter().enumerate() {
            if let Err(e) = self.send_followup(application_id, token, chunk).await {
                warn!("Aborting delivery at segment {}/{}: {}", i + 1, total, e);
                return Err(e);
            }
            debug!("Delivered segment {}/{}", i + 1, total);
        }

        Ok(total)
    }
}
