//! HTTP server exposing the chat-log directory.
//!
//! `GET /api/projects` serves the project index plus raw records (the payload
//! the dashboard fetches); `GET /api/summaries` serves the same records already
//! classified.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CodemindConfig;
use crate::source;
use crate::summary::Classifier;

/// Shared handler state.
pub struct AppState {
    pub logs_dir: PathBuf,
    pub classifier: Classifier,
}

impl AppState {
    pub fn from_config(config: &CodemindConfig) -> Self {
        Self {
            logs_dir: config.resolved_logs_dir(),
            classifier: Classifier::new(config.classifier.clone()),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/projects", get(get_projects))
        .route("/api/summaries", get(get_summaries))
        .with_state(state)
}

async fn get_projects(State(state): State<Arc<AppState>>) -> Response {
    let loaded = run_blocking(move || {
        source::load_payload(&state.logs_dir, &state.classifier.config().unknown_project)
    })
    .await;
    match loaded {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => load_failure(e),
    }
}

async fn get_summaries(State(state): State<Arc<AppState>>) -> Response {
    let loaded = run_blocking(move || {
        let records = source::load_records(&state.logs_dir)?;
        Ok(state.classifier.summarize_all(&records))
    })
    .await;
    match loaded {
        Ok(summaries) => Json(summaries).into_response(),
        Err(e) => load_failure(e),
    }
}

/// Directory scans and classification are synchronous file work; keep them
/// off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow::anyhow!("load task failed: {e}"))?
}

fn load_failure(e: anyhow::Error) -> Response {
    tracing::error!(error = %e, "failed to read project data");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Failed to read project data"})),
    )
        .into_response()
}

/// Bind to the configured address and serve until ctrl-c.
pub async fn serve(config: CodemindConfig) -> Result<()> {
    let bind_addr = config.bind_addr();
    let state = Arc::new(AppState::from_config(&config));
    tracing::info!(logs_dir = %state.logs_dir.display(), "serving chat logs");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr}/api/projects");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            }
            tracing::info!("shutting down server");
        })
        .await?;

    Ok(())
}
