//! Manual smoke test against the live completions API.
//! Run with: cargo run -p openai-client --example complete -- "moon landing"

use openai_client::{CompletionParams, Message, OpenAiClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    dotenvy::dotenv().ok();

    let api_key = std::env::var("OPENAI__API_KEY")?;
    let base_url = std::env::var("OPENAI__BASE_URL")
        .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
    let topic = std::env::args().nth(1).unwrap_or_else(|| "moon landing".into());

    let client = OpenAiClient::new(
        api_key,
        base_url,
        CompletionParams::default(),
        Duration::from_secs(60),
    )?;

    let answer = client
        .chat(vec![
            Message::system("Answer in one sentence."),
            Message::user(format!("Topic: {}", topic)),
        ])
        .await?;

    println!("{}", answer);
    Ok(())
}
