//! Gloss tokenizer.
//!
//! # Format
//! ```text
//! I[1234] LOVE[88] ^fs:bnz ^cl:point-armpit YOU[5]
//! ```
//! Units are separated by spaces. A unit is either a word with an optional
//! `[<digits>]` dictionary id, or a marker starting with `^` which is kept
//! verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single gloss unit after id stripping.
pub type Token = String;

/// Prefix of fingerspelling/classifier markers that are never stripped.
pub const MARKER_PREFIX: char = '^';

/// First `[<digits>]` occurrence in a unit.
static ID_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());

/// `word[id]` pairs anywhere in a gloss string.
static SIGN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z\-\^:]+)\[(\d+)\]").unwrap());

/// A sign referenced in a gloss, with its dictionary id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    pub word: String,
    pub id: u32,
}

/// Split a gloss string into tokens.
///
/// Empty units produced by repeated spaces are dropped.
pub fn tokenize(gloss: &str) -> Vec<Token> {
    gloss
        .split(' ')
        .filter(|unit| !unit.is_empty())
        .map(strip_unit)
        .collect()
}

/// Whether a unit is a marker (`^fs:...`, `^cl:...`).
pub fn is_marker(unit: &str) -> bool {
    unit.starts_with(MARKER_PREFIX)
}

fn strip_unit(unit: &str) -> Token {
    if is_marker(unit) {
        return unit.to_string();
    }
    ID_SUFFIX.replace(unit, "").into_owned()
}

/// Extract every `word[id]` sign from a gloss string.
pub fn parse_signs(gloss: &str) -> Vec<Sign> {
    SIGN_PATTERN
        .captures_iter(gloss)
        .filter_map(|caps| {
            let id = caps[2].parse().ok()?;
            Some(Sign {
                word: caps[1].to_string(),
                id,
            })
        })
        .collect()
}
