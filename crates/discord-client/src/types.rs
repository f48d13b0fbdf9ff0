//! Discord interaction types.

use serde::{Deserialize, Deserializer, Serialize};

/// Interaction kind, from the numeric `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u64")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u64),
}

impl From<u64> for InteractionType {
    fn from(value: u64) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

impl From<InteractionType> for u64 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Other(other) => other,
        }
    }
}

/// Incoming interaction event.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<InteractionData>,
    pub application_id: String,
    pub token: String,
}

/// Application command payload.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<CommandOption>,
}

/// Treat an explicit `null` list like a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single name/value command option.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl CommandOption {
    /// The option value as text. Non-string values use their JSON form.
    pub fn value_text(&self) -> Option<String> {
        match self.value.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Interaction {
    /// Command name, if this interaction carries command data.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }

    /// First option with the given name.
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|o| o.name == name)
    }

    /// Text value of the named option, or an empty string.
    pub fn option_text(&self, name: &str) -> String {
        self.option(name)
            .and_then(CommandOption::value_text)
            .unwrap_or_default()
    }
}

/// Initial response to an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
}

impl InteractionResponse {
    pub const PONG: u8 = 1;
    pub const DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 5;

    pub fn pong() -> Self {
        Self { kind: Self::PONG }
    }

    pub fn deferred() -> Self {
        Self {
            kind: Self::DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE,
        }
    }
}

/// Body of a follow-up webhook message.
#[derive(Debug, Clone, Serialize)]
pub struct FollowupMessage<'a> {
    pub content: &'a str,
}
