//! Application command handlers.

mod truth;

pub use truth::TruthHandler;

use async_trait::async_trait;
use discord_client::Interaction;

/// Application command handler.
///
/// Handlers run detached from the request that triggered them; their result
/// is delivered through the interaction's follow-up webhook.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "truth").
    fn name(&self) -> &str;

    /// Check if this handler matches the interaction.
    fn matches(&self, interaction: &Interaction) -> bool {
        interaction.command_name() == Some(self.name())
    }

    /// Execute the command, producing the follow-up message content.
    ///
    /// Failures are rendered into the returned text.
    async fn execute(&self, interaction: &Interaction) -> String;
}
