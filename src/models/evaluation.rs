//! Evaluation endpoint data models
//!
//! Request and response bodies of `POST /evaluate`

use serde::{Deserialize, Serialize};

/// Validation message returned whenever the `idea` field cannot be read
pub const MISSING_IDEA_MESSAGE: &str = "Missing 'idea' in request body";

/// Inbound evaluation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Free-form idea text, interpolated into the prompt verbatim
    pub idea: String,
}

impl EvaluationRequest {
    /// Parse a raw request body.
    ///
    /// Returns `None` when the body is empty, is not a JSON object, or has no
    /// string `idea` key. A `null` idea counts as missing; an empty string does not.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        let idea = value.as_object()?.get("idea")?.as_str()?;

        Some(Self {
            idea: idea.to_string(),
        })
    }
}

/// Successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Trimmed model output
    pub evaluation: String,
}

/// Error body shared by every failure path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error kind
    pub kind: String,
}
