//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use gloss_practice_backend::models::{Question, Sign, VideoExample};
use gloss_practice_backend::services::catalog::Catalog;

/// A video example whose sentence is `gloss`.
pub fn video_example(word_id: u32, common_word: &str, gloss: &str, english: &str) -> VideoExample {
    VideoExample {
        word_id,
        example_number: 1,
        video_type: None,
        common_word: common_word.to_string(),
        actual_gloss: None,
        minor_meanings: None,
        rank: 1,
        confidence: 1.0,
        video_url: format!("https://example.com/{}.mp4", common_word),
        english_translation: english.to_string(),
        sign_sequence: gloss_core::parse_signs(gloss),
        raw_sentence: gloss.to_string(),
    }
}

/// Catalog with three usable sentences and one placeholder example.
pub fn sample_catalog() -> Catalog {
    Catalog::from_videos(vec![
        video_example(1, "love", "I[1] LOVE[2] YOU[3]", "I love you."),
        video_example(
            1523,
            "clothes",
            "ME[4] clothes[1523] plenty[3721]",
            "I have plenty of clothes.",
        ),
        video_example(
            88,
            "go",
            "TOMORROW[5] ME[4] GO[88] ^cl:point-armpit",
            "Tomorrow I am going there.",
        ),
        video_example(9, "hello", "", "Example for hello"),
    ])
}

/// Catalog with one explicit grammar question and no videos.
pub fn single_question_catalog() -> Catalog {
    Catalog::new(
        Vec::new(),
        vec![Question {
            english: "Where do you live?".to_string(),
            gloss: "YOU[1] LIVE[2] WHERE[3]".to_string(),
            video_url: "https://example.com/live.mp4".to_string(),
            word_id: Some(2),
        }],
    )
}

/// Create a score request body.
pub fn score_request(gloss: &str, answer: &[&str], hint_used: bool) -> serde_json::Value {
    json!({ "gloss": gloss, "answer": answer, "hint_used": hint_used })
}

pub fn sign(word: &str, id: u32) -> Sign {
    Sign {
        word: word.to_string(),
        id,
    }
}
