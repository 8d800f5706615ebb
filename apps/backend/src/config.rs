//! Environment configuration for the backend.

use std::path::PathBuf;

use anyhow::Context;

/// Server configuration read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `video_examples.json` produced by the data extraction scripts.
    pub video_data_path: PathBuf,
    /// Optional grammar game questions. Derived from the videos when unset.
    pub grammar_data_path: Option<PathBuf>,
    /// Front-end assets served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// Default number of questions handed out per grammar game.
    pub grammar_questions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            video_data_path: PathBuf::from("video_examples.json"),
            grammar_data_path: None,
            static_dir: None,
            grammar_questions: 10,
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// Recognised vars:
    /// - HOST, PORT
    /// - VIDEO_DATA_PATH
    /// - GRAMMAR_DATA_PATH (optional)
    /// - STATIC_DIR (optional)
    /// - GRAMMAR_QUESTIONS
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", value))?,
            None => defaults.port,
        };

        let grammar_questions = match lookup("GRAMMAR_QUESTIONS") {
            Some(value) => value
                .parse::<usize>()
                .with_context(|| format!("GRAMMAR_QUESTIONS must be a number, got {:?}", value))?,
            None => defaults.grammar_questions,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            video_data_path: lookup("VIDEO_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.video_data_path),
            grammar_data_path: lookup("GRAMMAR_DATA_PATH").map(PathBuf::from),
            static_dir: lookup("STATIC_DIR").map(PathBuf::from),
            grammar_questions,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
