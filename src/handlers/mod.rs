//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod evaluate;
pub mod health;

use crate::config::Settings;
use crate::middleware::request_logging_middleware;
use crate::services::{CompletionClient, IdeaEvaluator, OpenAIClient};
use crate::utils::error::AppError;
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub evaluator: IdeaEvaluator,
    pub started_at: DateTime<Utc>,
}

/// Create application router backed by the OpenAI client
pub fn create_router(settings: Settings) -> Result<Router> {
    let client = OpenAIClient::new(&settings)?;
    Ok(create_router_with_client(settings, Arc::new(client)))
}

/// Create application router with an explicit completion backend
pub fn create_router_with_client(settings: Settings, client: Arc<dyn CompletionClient>) -> Router {
    let max_request_size = settings.request.max_request_size;

    let app_state = Arc::new(AppState {
        settings,
        evaluator: IdeaEvaluator::new(client),
        started_at: Utc::now(),
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Oversized bodies surface as a `Bytes` rejection inside the handler
    Router::new()
        .route("/evaluate", post(evaluate::evaluate_idea))
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(DefaultBodyLimit::max(max_request_size))
        .with_state(app_state)
        .layer(middleware_stack)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
