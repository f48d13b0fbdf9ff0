//! API response types.

use serde::Serialize;

/// Configuration presence report served on `GET /debug`.
///
/// Only booleans: secret values never leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebugResponse {
    #[serde(rename = "okDiscord")]
    pub ok_discord: bool,
    #[serde(rename = "okOpenAI")]
    pub ok_openai: bool,
}
