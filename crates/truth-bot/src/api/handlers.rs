//! HTTP request handlers.

use super::types::DebugResponse;
use super::AppState;
use crate::commands::CommandHandler;
use crate::error::BotError;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
    Json,
};
use discord_client::{DiscordClient, Interaction, InteractionResponse, InteractionType};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Configuration presence check.
pub async fn debug(State(state): State<AppState>) -> Json<DebugResponse> {
    Json(state.status)
}

/// Interactions endpoint.
///
/// Non-POST requests get a plain `OK`. POST bodies are buffered once, then
/// used for both signature verification and parsing.
pub async fn interactions(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, BotError> {
    if method != Method::POST {
        return Ok("OK".into_response());
    }

    let valid = state.verifier.verify_request(&headers, &body);
    debug!(valid, "Signature verification");
    if !valid {
        warn!("Rejected request with bad signature");
        return Err(BotError::Unauthorized);
    }

    let interaction: Interaction = serde_json::from_slice(&body)?;
    info!(kind = u64::from(interaction.kind), "Interaction received");

    match interaction.kind {
        InteractionType::Ping => Ok(Json(InteractionResponse::pong()).into_response()),
        InteractionType::ApplicationCommand => {
            let handler = state
                .handlers
                .iter()
                .find(|h| h.matches(&interaction))
                .cloned()
                .ok_or(BotError::Unhandled)?;

            spawn_followup(state.discord.clone(), handler, interaction);
            Ok(Json(InteractionResponse::deferred()).into_response())
        }
        InteractionType::Other(_) => Err(BotError::Unhandled),
    }
}

/// Run a command and deliver its output on a detached task.
///
/// The task is never joined; its outcome is only visible through the
/// follow-up messages and the logs.
fn spawn_followup(
    discord: Arc<DiscordClient>,
    handler: Arc<dyn CommandHandler>,
    interaction: Interaction,
) {
    tokio::spawn(async move {
        let command = handler.name().to_string();
        let content = handler.execute(&interaction).await;

        match discord
            .deliver(&interaction.application_id, &interaction.token, &content)
            .await
        {
            Ok(segments) => info!(%command, segments, "Follow-up delivered"),
            Err(e) => error!(%command, "Follow-up delivery failed: {}", e),
        }
    });
}
