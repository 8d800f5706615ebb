//! Question rounds and multi-question game sessions.
//!
//! A [`Round`] moves from unanswered to submitted exactly once. Input
//! adapters (mouse, touch, keyboard) only ever edit the [`AnswerBoard`]
//! through its index-based primitives.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::gloss::Token;
use crate::scoring::{apply_hint_penalty, score_sequence, ScoreResult, MAX_POINTS};
use crate::types::{GameConfig, Question, Verdict};

/// Word bank plus the learner's current arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerBoard {
    bank: Vec<Token>,
    answer: Vec<Token>,
}

impl AnswerBoard {
    pub fn new(bank: Vec<Token>) -> Self {
        Self {
            bank,
            answer: Vec::new(),
        }
    }

    /// Tokens not yet placed.
    pub fn bank(&self) -> &[Token] {
        &self.bank
    }

    /// The current candidate sequence.
    pub fn answer(&self) -> &[Token] {
        &self.answer
    }

    /// Move a bank token into the answer at `answer_index`.
    ///
    /// `answer_index` may equal the answer length to append.
    pub fn place(&mut self, bank_index: usize, answer_index: usize) -> Result<()> {
        check_index(bank_index, self.bank.len())?;
        check_index(answer_index, self.answer.len() + 1)?;
        let token = self.bank.remove(bank_index);
        self.answer.insert(answer_index, token);
        Ok(())
    }

    /// Append a bank token to the end of the answer.
    pub fn push(&mut self, bank_index: usize) -> Result<()> {
        self.place(bank_index, self.answer.len())
    }

    /// Return an answer token to the end of the bank.
    pub fn remove_at(&mut self, answer_index: usize) -> Result<Token> {
        check_index(answer_index, self.answer.len())?;
        let token = self.answer.remove(answer_index);
        self.bank.push(token.clone());
        Ok(token)
    }

    /// Reorder within the answer.
    pub fn move_within(&mut self, from: usize, to: usize) -> Result<()> {
        check_index(from, self.answer.len())?;
        check_index(to, self.answer.len())?;
        let token = self.answer.remove(from);
        self.answer.insert(to, token);
        Ok(())
    }

    /// Return every answer token to the bank, in answer order.
    pub fn clear(&mut self) {
        self.bank.append(&mut self.answer);
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(GameError::IndexOutOfRange { index, len })
    }
}

/// Frozen result of a submitted round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub answer: Vec<Token>,
    pub result: ScoreResult,
    /// Points after the hint penalty.
    pub awarded_points: u8,
    pub hint_used: bool,
}

/// State for a single question.
#[derive(Debug, Clone)]
pub struct Round {
    question: Question,
    canonical: Vec<Token>,
    board: AnswerBoard,
    hint_used: bool,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Load a question with a shuffled word bank.
    pub fn new<R: Rng + ?Sized>(question: Question, rng: &mut R) -> Self {
        let canonical = question.canonical_tokens();
        let mut bank = canonical.clone();
        bank.shuffle(rng);
        Self {
            question,
            canonical,
            board: AnswerBoard::new(bank),
            hint_used: false,
            outcome: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn canonical(&self) -> &[Token] {
        &self.canonical
    }

    pub fn board(&self) -> &AnswerBoard {
        &self.board
    }

    /// Mutable access to the board, refused once submitted.
    pub fn board_mut(&mut self) -> Result<&mut AnswerBoard> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadySubmitted);
        }
        Ok(&mut self.board)
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.outcome.is_some()
    }

    /// Reveal the reference video. Only one hint per question.
    pub fn use_hint(&mut self) -> Result<()> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadySubmitted);
        }
        if self.hint_used {
            return Err(GameError::HintAlreadyUsed);
        }
        self.hint_used = true;
        Ok(())
    }

    /// Score the current answer and freeze the round.
    pub fn submit(&mut self, hint_penalty: u8) -> Result<&RoundOutcome> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadySubmitted);
        }
        if self.board.answer.is_empty() {
            return Err(GameError::EmptyAnswer);
        }

        let result = score_sequence(&self.board.answer, &self.canonical);
        let awarded_points = if self.hint_used {
            apply_hint_penalty(result.points, hint_penalty)
        } else {
            result.points
        };

        Ok(self.outcome.insert(RoundOutcome {
            answer: self.board.answer.clone(),
            result,
            awarded_points,
            hint_used: self.hint_used,
        }))
    }
}

/// Final tally of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub verdict: Verdict,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game Complete! Final Score: {}/{} ({}%) {}",
            self.score,
            self.max_score,
            self.percentage,
            self.verdict.message()
        )
    }
}

/// A sequence of rounds drawn from a question bank.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    round: Option<Round>,
}

impl GameSession {
    /// Shuffle the bank, keep up to `config.max_questions` and load the first.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, bank: &[Question], rng: &mut R) -> Result<Self> {
        let mut questions = bank.to_vec();
        questions.shuffle(rng);
        questions.truncate(config.max_questions);

        let first = questions.first().cloned().ok_or(GameError::NoQuestions)?;
        let round = Round::new(first, rng);

        Ok(Self {
            config,
            questions,
            index: 0,
            score: 0,
            round: Some(round),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// One-based number of the current question.
    pub fn question_number(&self) -> usize {
        (self.index + 1).min(self.questions.len())
    }

    /// Sum of awarded points so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.round.is_none()
    }

    pub fn current(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    pub fn use_hint(&mut self) -> Result<()> {
        self.round.as_mut().ok_or(GameError::GameOver)?.use_hint()
    }

    /// Submit the current round and add its awarded points to the total.
    pub fn submit(&mut self) -> Result<&RoundOutcome> {
        let penalty = self.config.hint_penalty;
        let round = self.round.as_mut().ok_or(GameError::GameOver)?;
        let outcome = round.submit(penalty)?;
        self.score += u32::from(outcome.awarded_points);
        Ok(outcome)
    }

    /// Load the next question, discarding the submitted round.
    ///
    /// Returns `None` once every question has been played.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<&Round>> {
        let round = self.round.as_ref().ok_or(GameError::GameOver)?;
        if !round.is_submitted() {
            return Err(GameError::NotSubmitted);
        }

        self.index += 1;
        self.round = self
            .questions
            .get(self.index)
            .cloned()
            .map(|question| Round::new(question, rng));
        Ok(self.round.as_ref())
    }

    pub fn summary(&self) -> GameSummary {
        let max_score = self.questions.len() as u32 * u32::from(MAX_POINTS);
        let percentage = if max_score == 0 {
            0
        } else {
            (self.score * 200 + max_score) / (2 * max_score)
        };
        GameSummary {
            score: self.score,
            max_score,
            percentage,
            verdict: Verdict::from_percentage(percentage),
        }
    }
}
