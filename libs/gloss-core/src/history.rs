//! Interpretation practice history.
//!
//! Newest entries come first. The host decides where the serialized history
//! lives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries retained.
pub const HISTORY_CAPACITY: usize = 100;

/// Window size for the recent-vs-previous trend.
const TREND_WINDOW: usize = 10;

/// Mean difference treated as a real change.
const TREND_THRESHOLD: f64 = 0.5;

/// One scored interpretation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeEntry {
    pub timestamp: DateTime<Utc>,
    pub word_id: u32,
    pub common_word: String,
    pub video_url: String,
    pub english_translation: String,
    pub user_translation: String,
    pub score: f64,
}

/// Direction of recent scores compared with the window before.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "delta")]
pub enum Trend {
    Improving(f64),
    Declining(f64),
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PracticeStats {
    pub count: usize,
    pub average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PracticeHistory {
    entries: Vec<PracticeEntry>,
}

impl PracticeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PracticeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry at the front, dropping the oldest beyond capacity.
    pub fn record(&mut self, entry: PracticeEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> Option<PracticeStats> {
        if self.entries.is_empty() {
            return None;
        }

        let count = self.entries.len();
        let average = mean(&self.entries);
        let trend = (count >= TREND_WINDOW * 2).then(|| {
            let recent = mean(&self.entries[..TREND_WINDOW]);
            let previous = mean(&self.entries[TREND_WINDOW..TREND_WINDOW * 2]);
            let delta = recent - previous;
            if delta > TREND_THRESHOLD {
                Trend::Improving(delta)
            } else if delta < -TREND_THRESHOLD {
                Trend::Declining(delta.abs())
            } else {
                Trend::Steady
            }
        });

        Some(PracticeStats {
            count,
            average,
            trend,
        })
    }
}

fn mean(entries: &[PracticeEntry]) -> f64 {
    entries.iter().map(|e| e.score).sum::<f64>() / entries.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(score: f64) -> PracticeEntry {
        PracticeEntry {
            timestamp: Utc::now(),
            word_id: 1,
            common_word: "hello".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            english_translation: "Hello there".to_string(),
            user_translation: "Hi".to_string(),
            score,
        }
    }

    /// Record `older` first so `newer` ends up at the front.
    fn history(older: &[f64], newer: &[f64]) -> PracticeHistory {
        let mut history = PracticeHistory::new();
        for &score in older.iter().chain(newer) {
            history.record(entry(score));
        }
        history
    }

    #[test]
    fn test_empty_history_has_no_stats() {
        assert_eq!(PracticeHistory::new().stats(), None);
    }

    #[test]
    fn test_newest_first() {
        let history = history(&[1.0], &[9.0]);
        assert_eq!(history.entries()[0].score, 9.0);
        assert_eq!(history.entries()[1].score, 1.0);
    }

    #[test]
    fn test_capacity() {
        let mut history = PracticeHistory::new();
        for i in 0..(HISTORY_CAPACITY + 5) {
            history.record(entry(i as f64));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].score, (HISTORY_CAPACITY + 4) as f64);
    }

    #[test]
    fn test_average_without_trend() {
        let stats = history(&[4.0, 6.0], &[8.0]).stats().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average, 6.0);
        assert_eq!(stats.trend, None);
    }

    #[test]
    fn test_improving_trend() {
        let stats = history(&[5.0; 10], &[7.0; 10]).stats().unwrap();
        assert_eq!(stats.trend, Some(Trend::Improving(2.0)));
    }

    #[test]
    fn test_declining_trend() {
        let stats = history(&[8.0; 10], &[6.0; 10]).stats().unwrap();
        assert_eq!(stats.trend, Some(Trend::Declining(2.0)));
    }

    #[test]
    fn test_steady_trend() {
        let stats = history(&[6.0; 10], &[6.5; 10]).stats().unwrap();
        assert_eq!(stats.trend, Some(Trend::Steady));
    }

    #[test]
    fn test_trend_ignores_entries_beyond_two_windows() {
        let stats = history(&[0.0; 30], &[[6.0; 10], [6.0; 10]].concat())
            .stats()
            .unwrap();
        assert_eq!(stats.trend, Some(Trend::Steady));
        assert_eq!(stats.count, 50);
    }

    #[test]
    fn test_serializes_as_array() {
        let history = history(&[3.0], &[]);
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        let restored: PracticeHistory = serde_json::from_value(json).unwrap();
        assert_eq!(restored, history);
    }
}
