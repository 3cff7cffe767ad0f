//! Startup idea evaluation
//!
//! Builds the fixed evaluation prompt and extracts the model's answer

use crate::models::openai::{OpenAIMessage, OpenAIRequest};
use crate::services::client::CompletionClient;
use crate::utils::error::UpstreamError;
use std::sync::Arc;
use tracing::debug;

/// Model used for every evaluation
pub const EVALUATOR_MODEL: &str = "gpt-3.5-turbo";

/// Output length cap in tokens
pub const MAX_TOKENS: u32 = 200;

/// Sampling temperature
pub const TEMPERATURE: f32 = 0.7;

pub const SYSTEM_PROMPT: &str = "You are a startup evaluator.";

/// Prepended to the idea text in the user message
pub const USER_PROMPT_PREFIX: &str = "Evaluate this startup idea:\n";

/// Build the two-message prompt. The idea is interpolated verbatim.
pub fn build_messages(idea: &str) -> Vec<OpenAIMessage> {
    vec![
        OpenAIMessage::system(SYSTEM_PROMPT),
        OpenAIMessage::user(format!("{}{}", USER_PROMPT_PREFIX, idea)),
    ]
}

/// Build the complete upstream request for an idea
pub fn build_request(idea: &str) -> OpenAIRequest {
    OpenAIRequest {
        model: EVALUATOR_MODEL.to_string(),
        messages: build_messages(idea),
        max_tokens: Some(MAX_TOKENS),
        temperature: Some(TEMPERATURE),
    }
}

/// Evaluates ideas through a [`CompletionClient`]
#[derive(Clone)]
pub struct IdeaEvaluator {
    client: Arc<dyn CompletionClient>,
}

impl IdeaEvaluator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Ask the model for an evaluation and return its trimmed text
    pub async fn evaluate(&self, idea: &str) -> Result<String, UpstreamError> {
        let response = self.client.chat_completions(build_request(idea)).await?;

        let content = response.first_content().ok_or(UpstreamError::EmptyChoices)?;
        debug!("Received evaluation of {} chars", content.len());

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::openai::{OpenAIChoice, OpenAIResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CapturingClient {
        reply: Result<Option<String>, UpstreamError>,
        seen: Mutex<Vec<OpenAIRequest>>,
    }

    impl CapturingClient {
        fn replying(reply: Result<Option<String>, UpstreamError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for CapturingClient {
        async fn chat_completions(&self, request: OpenAIRequest) -> Result<OpenAIResponse, UpstreamError> {
            self.seen.lock().unwrap().push(request);

            let choices = match self.reply.clone()? {
                Some(text) => vec![OpenAIChoice {
                    index: 0,
                    message: OpenAIMessage {
                        role: "assistant".to_string(),
                        content: Some(text),
                    },
                    finish_reason: Some("stop".to_string()),
                }],
                None => Vec::new(),
            };

            Ok(OpenAIResponse {
                id: "chatcmpl-test".to_string(),
                object: "chat.completion".to_string(),
                created: 0,
                model: EVALUATOR_MODEL.to_string(),
                choices,
                usage: None,
            })
        }
    }

    #[test]
    fn test_build_request_uses_fixed_parameters() {
        let request = build_request("Uber for dogs");

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.max_tokens, Some(200));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0], OpenAIMessage::system("You are a startup evaluator."));
        assert_eq!(
            request.messages[1],
            OpenAIMessage::user("Evaluate this startup idea:\nUber for dogs")
        );
    }

    #[test]
    fn test_idea_is_not_sanitized() {
        let idea = "line one\nline \"two\" {{braces}}";
        let messages = build_messages(idea);
        assert_eq!(
            messages[1].content.as_deref(),
            Some("Evaluate this startup idea:\nline one\nline \"two\" {{braces}}")
        );
    }

    #[tokio::test]
    async fn test_evaluate_trims_first_choice() {
        let client = CapturingClient::replying(Ok(Some("  Solid niche.\n\n".to_string())));
        let evaluator = IdeaEvaluator::new(client.clone());

        let evaluation = evaluator.evaluate("A bakery").await.unwrap();
        assert_eq!(evaluation, "Solid niche.");

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], build_request("A bakery"));
    }

    #[tokio::test]
    async fn test_evaluate_without_choices_fails() {
        let evaluator = IdeaEvaluator::new(CapturingClient::replying(Ok(None)));

        let err = evaluator.evaluate("A bakery").await.unwrap_err();
        assert_eq!(err, UpstreamError::EmptyChoices);
    }

    #[tokio::test]
    async fn test_evaluate_propagates_client_error() {
        let evaluator = IdeaEvaluator::new(CapturingClient::replying(Err(
            UpstreamError::Transport("connection timed out".to_string()),
        )));

        let err = evaluator.evaluate("A bakery").await.unwrap_err();
        assert_eq!(err.to_string(), "connection timed out");
    }
}
