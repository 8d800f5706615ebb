//! In-memory catalog of video examples and grammar questions.

use std::path::{Path, PathBuf};

use gloss_core::{tokenize, Question, Sign};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Derived grammar questions need at least one join to score.
const MIN_QUESTION_TOKENS: usize = 2;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of `video_examples.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoExample {
    pub word_id: u32,
    #[serde(default)]
    pub example_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    pub common_word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_meanings: Option<String>,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub confidence: f64,
    pub video_url: String,
    pub english_translation: String,
    #[serde(default)]
    pub sign_sequence: Vec<Sign>,
    #[serde(default)]
    pub raw_sentence: String,
}

impl VideoExample {
    /// Grammar question built from the example sentence, if it is usable.
    pub fn to_question(&self) -> Option<Question> {
        if tokenize(&self.raw_sentence).len() < MIN_QUESTION_TOKENS {
            return None;
        }
        Some(Question {
            english: self.english_translation.clone(),
            gloss: self.raw_sentence.clone(),
            video_url: self.video_url.clone(),
            word_id: Some(self.word_id),
        })
    }
}

/// Read-only question data shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<VideoExample>,
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(videos: Vec<VideoExample>, questions: Vec<Question>) -> Self {
        Self { videos, questions }
    }

    /// Build a catalog whose grammar questions come from the videos.
    pub fn from_videos(videos: Vec<VideoExample>) -> Self {
        let questions = videos.iter().filter_map(VideoExample::to_question).collect();
        Self { videos, questions }
    }

    /// Load video examples and, optionally, a separate grammar question file.
    pub fn load(video_path: &Path, grammar_path: Option<&Path>) -> Result<Self, CatalogError> {
        let videos: Vec<VideoExample> = read_json(video_path)?;
        let catalog = match grammar_path {
            Some(path) => Self::new(videos, read_json(path)?),
            None => Self::from_videos(videos),
        };

        tracing::info!(
            "Loaded {} video examples and {} grammar questions",
            catalog.videos.len(),
            catalog.questions.len()
        );
        Ok(catalog)
    }

    pub fn videos(&self) -> &[VideoExample] {
        &self.videos
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn random_video<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&VideoExample> {
        self.videos.choose(rng)
    }

    /// Up to `count` distinct questions in random order.
    pub fn random_questions<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Question> {
        let mut picked: Vec<&Question> = self.questions.choose_multiple(rng, count).collect();
        picked.shuffle(rng);
        picked
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    const VIDEOS_JSON: &str = r#"[
        {
            "word_id": 1523,
            "example_number": 1,
            "common_word": "clothes",
            "rank": 12,
            "confidence": 0.92,
            "video_url": "https://example.com/clothes.mp4",
            "english_translation": "I have plenty of clothes.",
            "sign_sequence": [{"word": "clothes", "id": 1523}, {"word": "plenty", "id": 3721}],
            "raw_sentence": "ME[1] clothes[1523] plenty[3721]"
        },
        {
            "word_id": 88,
            "example_number": 2,
            "video_type": "finalexample2",
            "common_word": "go",
            "actual_gloss": "go",
            "minor_meanings": "leave, depart",
            "rank": 3,
            "confidence": 1.0,
            "video_url": "https://example.com/go.mp4",
            "english_translation": "Example for go",
            "sign_sequence": [],
            "raw_sentence": ""
        }
    ]"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_derives_questions() {
        let file = write_temp(VIDEOS_JSON);
        let catalog = Catalog::load(file.path(), None).unwrap();

        assert_eq!(catalog.videos().len(), 2);
        assert_eq!(catalog.questions().len(), 1);

        let question = &catalog.questions()[0];
        assert_eq!(question.english, "I have plenty of clothes.");
        assert_eq!(question.canonical_tokens(), vec!["ME", "clothes", "plenty"]);
        assert_eq!(question.word_id, Some(1523));
    }

    #[test]
    fn test_load_with_grammar_file() {
        let videos = write_temp(VIDEOS_JSON);
        let grammar = write_temp(
            r#"[{"english": "Hello", "nzsl": "HELLO[1] YOU[2]", "video": "v.mp4", "word_id": 1}]"#,
        );
        let catalog = Catalog::load(videos.path(), Some(grammar.path())).unwrap();
        assert_eq!(catalog.questions().len(), 1);
        assert_eq!(catalog.questions()[0].english, "Hello");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/videos.json"), None).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_temp("{not json");
        let err = Catalog::load(file.path(), None).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
    }

    #[test]
    fn test_random_selection() {
        let file = write_temp(VIDEOS_JSON);
        let catalog = Catalog::load(file.path(), None).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(catalog.random_video(&mut rng).is_some());
        assert_eq!(catalog.random_questions(5, &mut rng).len(), 1);
        assert!(Catalog::default().random_video(&mut rng).is_none());
    }
}
