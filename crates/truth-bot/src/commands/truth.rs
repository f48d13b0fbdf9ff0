//! `/truth topic:<text>` command.

use super::CommandHandler;
use async_trait::async_trait;
use discord_client::Interaction;
use openai_client::{Message, OpenAiClient};
use std::sync::Arc;
use tracing::{info, instrument, warn};

const SYSTEM_PROMPT: &str = "You are a fearless whistleblower historian. No sugarcoating. \
Expose hidden/ignored aspects responsibly.";

/// Answers a topic with a blunt, concise completion.
pub struct TruthHandler {
    openai: Arc<OpenAiClient>,
}

impl TruthHandler {
    pub fn new(openai: Arc<OpenAiClient>) -> Self {
        Self { openai }
    }

    fn prompt(topic: &str) -> Vec<Message> {
        vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!(
                "Topic: {}\nGive me the brutal truth (concise).",
                topic
            )),
        ]
    }
}

#[async_trait]
impl CommandHandler for TruthHandler {
    fn name(&self) -> &str {
        "truth"
    }

    #[instrument(skip(self, interaction), fields(application_id = %interaction.application_id))]
    async fn execute(&self, interaction: &Interaction) -> String {
        let topic = interaction.option_text("topic");
        info!(topic_len = topic.len(), "Running truth command");

        match self.openai.chat(Self::prompt(&topic)).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Completion failed: {}", e);
                format!("❌ Error: {}", e)
            }
        }
    }
}
