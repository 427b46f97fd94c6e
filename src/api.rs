use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::environment::OutputFormat;
use crate::error::ServiceError;
use crate::generator::{self, GenerationResult};
use crate::llm::TextGenerator;
use crate::news::HeadlineSource;
use crate::TARGET_WEB_REQUEST;

/// Shared application state: the two upstream clients and the deployment's
/// output format, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub headlines: Arc<dyn HeadlineSource>,
    pub generator: Arc<dyn TextGenerator>,
    pub output_format: OutputFormat,
}

#[derive(Deserialize)]
struct TopicRequest {
    topic: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-post", post(generate_post))
        .route("/", get(root))
        .route("/heartbeat", get(heartbeat))
        .with_state(state)
}

async fn generate_post(
    State(state): State<AppState>,
    Json(payload): Json<TopicRequest>,
) -> Result<Json<GenerationResult>, ServiceError> {
    info!(target: TARGET_WEB_REQUEST, "Received generation request for topic '{}'", payload.topic);

    let result = generator::generate_post(
        state.headlines.as_ref(),
        state.generator.as_ref(),
        state.output_format,
        &payload.topic,
    )
    .await?;

    Ok(Json(result))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Post generation service is running." }))
}

async fn heartbeat() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
