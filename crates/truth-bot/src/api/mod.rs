//! HTTP API for the interactions endpoint.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::commands::{CommandHandler, TruthHandler};
use crate::config::Config;
use crate::verify::SignatureVerifier;
use anyhow::{Context, Result};
use axum::{middleware as axum_middleware, routing::get, Router};
use discord_client::DiscordClient;
use openai_client::OpenAiClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    /// Request signature verifier
    pub verifier: Arc<SignatureVerifier>,
    /// Follow-up webhook client
    pub discord: Arc<DiscordClient>,
    /// Application command handlers, first match wins
    pub handlers: Arc<Vec<Arc<dyn CommandHandler>>>,
    /// Configuration presence report
    pub status: DebugResponse,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        verifier: SignatureVerifier,
        discord: DiscordClient,
        handlers: Vec<Arc<dyn CommandHandler>>,
        status: DebugResponse,
    ) -> Self {
        Self {
            verifier: Arc::new(verifier),
            discord: Arc::new(discord),
            handlers: Arc::new(handlers),
            status,
        }
    }

    /// Build clients and handlers from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let openai = OpenAiClient::new(
            &config.openai.api_key,
            &config.openai.base_url,
            config.openai.completion_params(),
            config.openai.timeout,
        )
        .context("Failed to create OpenAI client")?;

        let discord = DiscordClient::new(&config.discord.api_url, config.discord.timeout)
            .context("Failed to create Discord client")?;

        let handlers: Vec<Arc<dyn CommandHandler>> =
            vec![Arc::new(TruthHandler::new(Arc::new(openai)))];

        let status = DebugResponse {
            ok_discord: config.discord.public_key_ok(),
            ok_openai: config.openai.api_key_ok(),
        };

        Ok(Self::new(
            SignatureVerifier::new(&config.discord.public_key),
            discord,
            handlers,
            status,
        ))
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Presence check; other methods on this path fall through to the endpoint
        .route(
            "/debug",
            get(handlers::debug).fallback(handlers::interactions),
        )
        .fallback(handlers::interactions)
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
