//! Configuration loaded from environment variables.

use anyhow::{Context, Result};
use openai_client::CompletionParams;
use serde::Deserialize;
use std::time::Duration;

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord configuration
    #[serde(default)]
    pub discord: DiscordConfig,

    /// OpenAI configuration
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Application public key, hex encoded
    #[serde(default)]
    pub public_key: String,

    /// Discord REST API URL
    #[serde(default = "default_discord_api_url")]
    pub api_url: String,

    /// Follow-up request timeout
    #[serde(default = "default_discord_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key
    #[serde(default)]
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_openai_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Completion request timeout
    #[serde(default = "default_openai_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            api_url: default_discord_api_url(),
            timeout: default_discord_timeout(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_openai_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout: default_openai_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_discord_api_url() -> String {
    "https://discord.com/api/v10".into()
}

fn default_discord_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    400
}

fn default_openai_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8787
}

fn default_log_level() -> String {
    "info".into()
}

impl DiscordConfig {
    /// Whether the public key looks like 32 bytes of lowercase hex.
    pub fn public_key_ok(&self) -> bool {
        self.public_key.len() == 64
            && self
                .public_key
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl OpenAiConfig {
    /// Whether an API key of the expected shape is present.
    pub fn api_key_ok(&self) -> bool {
        self.api_key.starts_with("sk-")
    }

    pub fn completion_params(&self) -> CompletionParams {
        CompletionParams {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keys are hex and tokens, keep them as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
