//! Truth Bot - Discord interactions endpoint.
//!
//! Receives signed interaction webhooks, acknowledges `/truth` commands
//! immediately and posts the generated answer through the interaction's
//! follow-up webhook once the completion API responds.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod verify;

pub use config::Config;
pub use error::BotError;
pub use verify::SignatureVerifier;
