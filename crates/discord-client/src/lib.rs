//! Discord interactions types and follow-up webhook client.

mod chunk;
mod client;
mod error;
mod types;

pub use chunk::{split_message, MESSAGE_LIMIT};
pub use client::{DiscordClient, EMPTY_ANSWER};
pub use error::DiscordError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::assert_ok;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> DiscordClient {
        DiscordClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap()
    }

    async fn sent_contents(mock_server: &MockServer) -> Vec<String> {
        mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| {
                let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
                body["content"].as_str().unwrap().to_string()
            })
            .collect()
    }

    #[test]
    fn test_followup_url() {
        let client =
            DiscordClient::new("https://discord.com/api/v10/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.followup_url("123456", "tok-en_1"),
            "https://discord.com/api/v10/webhooks/123456/tok-en_1"
        );
    }

    #[tokio::test]
    async fn test_send_followup() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks/42/abc"))
            .and(body_json(serde_json::json!({ "content": "Hello!" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert_ok!(client.send_followup("42", "abc", "Hello!").await);
    }

    #[tokio::test]
    async fn test_send_followup_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks/42/abc"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Unknown Webhook"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.send_followup("42", "abc", "Hello!").await;
        assert!(matches!(result, Err(DiscordError::Api { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        let client = DiscordClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let err = client
            .deliver("42", "SECRET-INTERACTION-TOKEN", "hi")
            .await
            .unwrap_err();

        assert!(matches!(err, DiscordError::Http(_)));
        let text = format!("{} {:?}", err, err);
        assert!(!text.contains("SECRET-INTERACTION-TOKEN"), "{}", text);
    }

    #[tokio::test]
    async fn test_deliver_long_text_in_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks/42/abc"))
            .respond_with(ResponseTemplate::new(204))
            .expect(3)
            .mount(&mock_server)
            .await;

        let text = format!("{}{}{}", "a".repeat(2000), "b".repeat(2000), "c".repeat(10));
        let client = create_test_client(&mock_server);
        let sent = assert_ok!(client.deliver("42", "abc", &text).await);

        assert_eq!(sent, 3);
        let contents = sent_contents(&mock_server).await;
        assert_eq!(contents[0], "a".repeat(2000));
        assert_eq!(contents[1], "b".repeat(2000));
        assert_eq!(contents[2], "c".repeat(10));
        assert_eq!(contents.concat(), text);
    }

    #[tokio::test]
    async fn test_deliver_empty_text_sends_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks/42/abc"))
            .and(body_json(serde_json::json!({ "content": "No answer." })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert_eq!(client.deliver("42", "abc", "   \n").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_deliver_aborts_after_failed_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks/42/abc"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = "x".repeat(4500);
        let client = create_test_client(&mock_server);
        let result = client.deliver("42", "abc", &text).await;

        assert!(matches!(result, Err(DiscordError::Api { status: 500, .. })));
        assert_eq!(sent_contents(&mock_server).await.len(), 1);
    }

    #[test]
    fn test_parse_ping() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "id": "1",
            "type": 1,
            "application_id": "42",
            "token": "abc",
            "version": 1
        }))
        .unwrap();

        assert_eq!(interaction.kind, InteractionType::Ping);
        assert!(interaction.data.is_none());
        assert_eq!(interaction.command_name(), None);
    }

    #[test]
    fn test_parse_command_options() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "type": 2,
            "application_id": "42",
            "token": "abc",
            "data": {
                "id": "99",
                "name": "truth",
                "options": [
                    { "name": "topic", "type": 3, "value": "moon landing" },
                    { "name": "topic", "type": 3, "value": "second" },
                    { "name": "count", "type": 4, "value": 3 }
                ]
            }
        }))
        .unwrap();

        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        assert_eq!(interaction.command_name(), Some("truth"));
        assert_eq!(interaction.option_text("topic"), "moon landing");
        assert_eq!(interaction.option_text("count"), "3");
        assert_eq!(interaction.option_text("missing"), "");
    }

    #[test]
    fn test_parse_unknown_type() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "type": 3,
            "application_id": "42",
            "token": "abc"
        }))
        .unwrap();
        assert_eq!(interaction.kind, InteractionType::Other(3));
        assert_eq!(u64::from(interaction.kind), 3);

        let wide: Interaction = serde_json::from_value(serde_json::json!({
            "type": 300,
            "application_id": "42",
            "token": "abc"
        }))
        .unwrap();
        assert_eq!(wide.kind, InteractionType::Other(300));
    }

    #[test]
    fn test_parse_null_options() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "type": 2,
            "application_id": "42",
            "token": "abc",
            "data": { "name": "truth", "options": null }
        }))
        .unwrap();

        assert_eq!(interaction.command_name(), Some("truth"));
        assert!(interaction.data.as_ref().unwrap().options.is_empty());
        assert_eq!(interaction.option_text("topic"), "");
    }

    #[test]
    fn test_parse_missing_token_fails() {
        let result: Result<Interaction, _> = serde_json::from_value(serde_json::json!({
            "type": 1,
            "application_id": "42"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_interaction_responses() {
        assert_eq!(
            serde_json::to_string(&InteractionResponse::pong()).unwrap(),
            r#"{"type":1}"#
        );
        assert_eq!(
            serde_json::to_string(&InteractionResponse::deferred()).unwrap(),
            r#"{"type":5}"#
        );
    }
}
