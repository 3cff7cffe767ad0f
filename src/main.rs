//! Startup Idea Evaluator Server
//!
//! HTTP service exposing `POST /evaluate`

use anyhow::{Context, Result};
use idea_evaluator::{create_router, version_info, Settings};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load server settings from environment (.env is read here too)
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging.level, &settings.logging.format)?;
    info!("{}", version_info());

    if settings.openai.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, evaluations will fail until it is provided");
    }

    let addr = settings.bind_address();
    let app = create_router(settings).context("Failed to create router")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Idea evaluator server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("💡 Evaluate endpoint: http://{}/evaluate", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging(log_level: &str, log_format: &str) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}
