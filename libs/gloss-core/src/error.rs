//! Error types for gloss-core.

use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Invalid operations on a round or game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("hint already used for this question")]
    HintAlreadyUsed,

    #[error("answer already submitted")]
    AlreadySubmitted,

    #[error("current question has not been submitted")]
    NotSubmitted,

    #[error("answer is empty")]
    EmptyAnswer,

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no questions available")]
    NoQuestions,

    #[error("game is over")]
    GameOver,
}
