//! Transcript endpoint.
//!
//! - Fetch and normalize a video's subtitles (POST /get_transcript)

use crate::api::error::ApiResult;
use crate::transcript::TranscriptService;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub text: String,
}

/// Creates the transcript router.
pub fn router(service: Arc<TranscriptService>) -> Router {
    Router::new()
        .route("/get_transcript", post(get_transcript))
        .with_state(service)
}

/// POST /get_transcript - Return the plain text of a video's subtitles.
///
/// Any failure, including a malformed body, is a 500 with `{"error": "..."}`.
async fn get_transcript(
    State(service): State<Arc<TranscriptService>>,
    payload: Result<Json<TranscriptRequest>, JsonRejection>,
) -> ApiResult<Json<TranscriptResponse>> {
    let Json(request) = payload.inspect_err(|e| error!("Rejected transcript request: {}", e))?;
    info!("Transcript requested for {}", request.url);

    let text = service
        .transcript(&request.url)
        .await
        .inspect_err(|e| error!("Transcript for {} failed: {}", request.url, e))?;

    Ok(Json(TranscriptResponse { text }))
}
