//! API request and response types

use serde::{Deserialize, Serialize};

pub use crate::services::catalog::VideoExample;
pub use gloss_core::{Question, ScoreBand, ScoreResult, Sign, Token};

// === Grammar Game ===

/// Query for GET /api/grammar/questions
#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub count: Option<usize>,
}

/// A question as handed to the client, with its shuffled word bank.
#[derive(Debug, Serialize, Deserialize)]
pub struct GrammarQuestion {
    pub english: String,
    pub gloss: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_id: Option<u32>,
    /// Canonical tokens in random order.
    pub tokens: Vec<Token>,
    pub signs: Vec<Sign>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<GrammarQuestion>,
}

/// Body of POST /api/grammar/score
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Source gloss of the question (ids allowed).
    pub gloss: String,
    /// The learner's arrangement.
    pub answer: Vec<Token>,
    #[serde(default)]
    pub hint_used: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub result: ScoreResult,
    /// Points after the hint penalty.
    pub awarded_points: u8,
    pub hint_used: bool,
    pub band: ScoreBand,
    pub correct_order: Vec<Token>,
}
