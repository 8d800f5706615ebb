//! Core types for the practice games.

use serde::{Deserialize, Serialize};

use crate::gloss::{self, Sign, Token};
use crate::scoring::DEFAULT_HINT_PENALTY;

/// One grammar question: an English prompt and its NZSL gloss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub english: String,
    #[serde(alias = "nzsl")]
    pub gloss: String,
    #[serde(alias = "video", default)]
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_id: Option<u32>,
}

impl Question {
    /// Canonical token order for this question.
    pub fn canonical_tokens(&self) -> Vec<Token> {
        gloss::tokenize(&self.gloss)
    }

    /// Signs with dictionary ids, for clickable gloss display.
    pub fn signs(&self) -> Vec<Sign> {
        gloss::parse_signs(&self.gloss)
    }
}

/// Per-variant game behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub hint_penalty: u8,
    pub max_questions: usize,
}

impl GameConfig {
    /// The grammar tab of the practice app.
    pub fn grammar() -> Self {
        Self {
            hint_penalty: DEFAULT_HINT_PENALTY,
            max_questions: 10,
        }
    }

    /// The standalone grammar game.
    pub fn classic() -> Self {
        Self {
            hint_penalty: DEFAULT_HINT_PENALTY,
            max_questions: 20,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::grammar()
    }
}

/// Display band for a 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            Self::Low
        } else if score <= 6.0 {
            Self::Fair
        } else if score <= 8.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    /// CSS-style label used by the front end.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "score-0-3",
            Self::Fair => "score-4-6",
            Self::Good => "score-7-8",
            Self::Excellent => "score-9-10",
        }
    }
}

/// End-of-game verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    KeepPracticing,
}

impl Verdict {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Good => "Good job!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}
