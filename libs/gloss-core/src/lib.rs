//! Core library for the NZSL gloss practice games.
//!
//! Provides:
//! - Gloss tokenizer (id stripping, marker pass-through, sign extraction)
//! - Partial-credit sequence scorer based on adjacent joins
//! - Question rounds, hint policy and multi-question game sessions
//! - Interpretation practice history with trend statistics

pub mod error;
pub mod game;
pub mod gloss;
pub mod history;
pub mod scoring;
pub mod types;

pub use error::{GameError, Result};
pub use game::{AnswerBoard, GameSession, GameSummary, Round, RoundOutcome};
pub use gloss::{parse_signs, tokenize, Sign, Token};
pub use history::{PracticeEntry, PracticeHistory, PracticeStats, Trend};
pub use scoring::{
    apply_hint_penalty, score_sequence, ScoreResult, TokenMark, DEFAULT_HINT_PENALTY, MAX_POINTS,
};
pub use types::{GameConfig, Question, ScoreBand, Verdict};
