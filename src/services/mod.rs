//! Service layer module
//!
//! Contains the upstream completion client and the idea evaluator

pub mod client;
pub mod evaluator;

pub use client::{CompletionClient, OpenAIClient};
pub use evaluator::IdeaEvaluator;
