//! Partial-credit scoring for reordered gloss sequences.

use serde::{Deserialize, Serialize};

/// Points for an exact answer.
pub const MAX_POINTS: u8 = 10;

/// Points deducted when the learner asked for a hint.
pub const DEFAULT_HINT_PENALTY: u8 = 2;

const CORRECT_JOIN: char = '-';
const INCORRECT_JOIN: char = '*';

/// Per-token classification aligned with the candidate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMark {
    Correct,
    Incorrect,
}

/// Result of scoring a candidate against the canonical sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Points between 0 and 10, before any hint penalty.
    pub points: u8,
    /// Candidate equals the canonical sequence in order and length.
    pub is_exact: bool,
    /// Human readable explanation (empty for exact and empty answers).
    pub feedback: String,
    pub token_marks: Vec<TokenMark>,
    /// Correctness of each adjacent pair in the candidate.
    pub joins: Vec<bool>,
}

impl ScoreResult {
    fn empty() -> Self {
        Self {
            points: 0,
            is_exact: false,
            feedback: String::new(),
            token_marks: Vec::new(),
            joins: Vec::new(),
        }
    }

    /// Number of correct joins.
    pub fn correct_joins(&self) -> usize {
        self.joins.iter().filter(|&&ok| ok).count()
    }
}

/// Score a candidate ordering against the canonical ordering.
///
/// Never fails: empty candidates score zero and a zero-join comparison
/// yields zero points.
pub fn score_sequence<C, K>(candidate: &[C], canonical: &[K]) -> ScoreResult
where
    C: AsRef<str>,
    K: AsRef<str>,
{
    let n = candidate.len();
    if n == 0 {
        return ScoreResult::empty();
    }

    if is_exact_match(candidate, canonical) {
        return ScoreResult {
            points: MAX_POINTS,
            is_exact: true,
            feedback: String::new(),
            token_marks: vec![TokenMark::Correct; n],
            joins: vec![true; n - 1],
        };
    }

    if n != canonical.len() {
        return ScoreResult {
            points: 0,
            is_exact: false,
            feedback: format!("wrong word count (got {}, expected {})", n, canonical.len()),
            token_marks: vec![TokenMark::Incorrect; n],
            joins: vec![false; n - 1],
        };
    }

    let joins = join_outcomes(candidate, canonical);

    let mut token_marks = vec![TokenMark::Incorrect; n];
    for (i, &ok) in joins.iter().enumerate() {
        if ok {
            token_marks[i] = TokenMark::Correct;
            token_marks[i + 1] = TokenMark::Correct;
        }
    }

    let correct = joins.iter().filter(|&&ok| ok).count();
    let points = join_points(correct, joins.len());

    ScoreResult {
        points,
        is_exact: false,
        feedback: join_feedback(candidate, &joins),
        token_marks,
        joins,
    }
}

/// Strict order-and-length equality.
pub fn is_exact_match<C, K>(candidate: &[C], canonical: &[K]) -> bool
where
    C: AsRef<str>,
    K: AsRef<str>,
{
    candidate.len() == canonical.len()
        && candidate
            .iter()
            .zip(canonical)
            .all(|(a, b)| a.as_ref() == b.as_ref())
}

/// For each adjacent pair in `candidate`, whether it appears adjacently
/// anywhere in `canonical`.
pub fn join_outcomes<C, K>(candidate: &[C], canonical: &[K]) -> Vec<bool>
where
    C: AsRef<str>,
    K: AsRef<str>,
{
    candidate
        .windows(2)
        .map(|pair| {
            canonical.windows(2).any(|expected| {
                pair[0].as_ref() == expected[0].as_ref() && pair[1].as_ref() == expected[1].as_ref()
            })
        })
        .collect()
}

/// `correct / total * 10`, rounded half up, clamped to `MAX_POINTS`.
pub fn join_points(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    // floor((20c + t) / 2t) == round_half_up(10c / t)
    let points = (20 * correct + total) / (2 * total);
    points.min(MAX_POINTS as usize) as u8
}

/// Points awarded after a hint penalty, never below zero.
pub fn apply_hint_penalty(points: u8, penalty: u8) -> u8 {
    points.saturating_sub(penalty)
}

fn join_feedback<C: AsRef<str>>(candidate: &[C], joins: &[bool]) -> String {
    let correct = joins.iter().filter(|&&ok| ok).count();
    let mut out = format!("{}/{} correct joins: ", correct, joins.len());
    for (i, token) in candidate.iter().enumerate() {
        out.push_str(token.as_ref());
        if let Some(&ok) = joins.get(i) {
            out.push(if ok { CORRECT_JOIN } else { INCORRECT_JOIN });
        }
    }
    out
}
