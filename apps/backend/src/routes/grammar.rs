//! Grammar game endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use gloss_core::{apply_hint_penalty, score_sequence, tokenize, ScoreBand};
use rand::seq::SliceRandom;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/grammar/questions
pub async fn questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<QuestionsResponse>> {
    let count = query.count.unwrap_or(state.game.max_questions);
    if count == 0 {
        return Err(ApiError::BadRequest("count must be at least 1".to_string()));
    }

    let mut rng = rand::thread_rng();
    let picked = state.catalog.random_questions(count, &mut rng);
    if picked.is_empty() {
        return Err(ApiError::NotFound("No grammar questions loaded".to_string()));
    }

    let questions = picked
        .into_iter()
        .map(|question| {
            let mut tokens = question.canonical_tokens();
            tokens.shuffle(&mut rng);
            GrammarQuestion {
                english: question.english.clone(),
                gloss: question.gloss.clone(),
                video_url: question.video_url.clone(),
                word_id: question.word_id,
                tokens,
                signs: question.signs(),
            }
        })
        .collect();

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/grammar/score
pub async fn score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>> {
    let canonical = tokenize(&request.gloss);
    if canonical.is_empty() {
        return Err(ApiError::BadRequest("gloss contains no tokens".to_string()));
    }

    let result = score_sequence(&request.answer, &canonical);
    let awarded_points = if request.hint_used {
        apply_hint_penalty(result.points, state.game.hint_penalty)
    } else {
        result.points
    };

    tracing::debug!(
        "Scored grammar answer: {}/10, awarded {} (hint used: {})",
        result.points,
        awarded_points,
        request.hint_used
    );

    Ok(Json(ScoreResponse {
        band: ScoreBand::from_score(f64::from(awarded_points)),
        result,
        awarded_points,
        hint_used: request.hint_used,
        correct_order: canonical,
    }))
}
