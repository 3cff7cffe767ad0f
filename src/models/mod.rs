//! Data models module
//!
//! Defines the evaluation endpoint bodies and the upstream OpenAI wire types

pub mod evaluation;
pub mod openai;

pub use evaluation::{EvaluationRequest, EvaluationResponse, ErrorResponse, MISSING_IDEA_MESSAGE};
