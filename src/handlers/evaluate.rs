//! Startup idea evaluation handler
//!
//! POST /evaluate

use crate::handlers::AppState;
use crate::models::{EvaluationRequest, EvaluationResponse};
use crate::utils::error::{AppError, AppResult};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Handle an evaluation request
///
/// The body is parsed by hand so that an absent body, invalid JSON and a
/// missing `idea` key all produce the same validation error.
pub async fn evaluate_idea(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<EvaluationResponse>> {
    let body = body.map_err(|rejection| body_error(&state, rejection))?;
    let request = EvaluationRequest::from_body(&body).ok_or_else(AppError::missing_idea)?;
    debug!("Evaluating idea of {} chars", request.idea.chars().count());

    let evaluation = state.evaluator.evaluate(&request.idea).await?;

    info!("Evaluation completed");
    Ok(Json(EvaluationResponse { evaluation }))
}

/// Map a body buffering failure to an application error
fn body_error(state: &AppState, rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(state.settings.request.max_request_size)
    } else {
        debug!("Failed to read request body: {}", rejection.body_text());
        AppError::missing_idea()
    }
}
