//! Video example endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::VideoExample;
use crate::AppState;

/// GET /random_video
pub async fn random(State(state): State<AppState>) -> Result<Json<VideoExample>> {
    let video = state
        .catalog
        .random_video(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No video examples loaded".to_string()))?;

    tracing::debug!("Serving video example {} ({})", video.word_id, video.common_word);
    Ok(Json(video))
}
