//! Logging utilities
//!
//! Helpers that keep outbound request logs readable

use crate::models::openai::{OpenAIMessage, OpenAIRequest};

/// Set to true to log full prompt text in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", head, total - max_chars)
    } else {
        s.to_string()
    }
}

fn filter_message(msg: &OpenAIMessage) -> serde_json::Value {
    let content = match &msg.content {
        Some(text) => {
            let max_len = if msg.role == "system" { 100 } else { 200 };
            serde_json::Value::String(truncate_content(text, max_len))
        }
        None => serde_json::Value::Null,
    };

    serde_json::json!({
        "role": msg.role,
        "content": content,
    })
}

/// Create a filtered summary of an OpenAI request for logging
/// Keeps original structure but truncates long prompt text
pub fn create_request_log_summary(request: &OpenAIRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        let messages: Vec<serde_json::Value> = request.messages.iter().map(filter_message).collect();

        serde_json::json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "messages": messages,
        })
    }
}
