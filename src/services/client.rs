//! HTTP client service
//!
//! Encapsulates HTTP communication with the OpenAI chat completion API

use crate::config::Settings;
use crate::models::openai::*;
use crate::utils::error::UpstreamError;
use crate::utils::logging::{create_request_log_summary, truncate_content};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Chat completion backend.
///
/// Handlers only see this trait, so tests can swap in a stub.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a chat completion request
    async fn chat_completions(&self, request: OpenAIRequest) -> Result<OpenAIResponse, UpstreamError>;
}

/// OpenAI API client
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAIClient {
    /// Create a new client instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("idea-evaluator/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = settings.openai.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.openai.base_url.clone(),
            api_key: settings.openai.api_key.clone(),
        })
    }

    /// Build the request URL
    fn build_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Handle HTTP response
    async fn handle_response(&self, response: Response) -> Result<OpenAIResponse, UpstreamError> {
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            let openai_response: OpenAIResponse = serde_json::from_str(&body)
                .map_err(|e| UpstreamError::Decode(e.to_string()))?;

            debug!("OpenAI request completed successfully");
            Ok(openai_response)
        } else {
            let message = match serde_json::from_str::<OpenAIErrorResponse>(&body) {
                Ok(error_response) => error_response.error.message,
                Err(_) => truncate_content(body.trim(), 200),
            };

            error!("OpenAI API request failed: {} - {}", status, message);
            Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn chat_completions(&self, request: OpenAIRequest) -> Result<OpenAIResponse, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;

        if let Ok(summary) = serde_json::to_string(&create_request_log_summary(&request)) {
            debug!("Sending OpenAI chat completion request: {}", summary);
        }

        let response = self
            .client
            .post(self.build_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }
}

/// Render a reqwest failure without the request URL
fn transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Transport("Request timed out.".to_string())
    } else {
        UpstreamError::Transport(err.without_url().to_string())
    }
}
