//! Emotion categories and keyword-based detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion a message is classified into.
///
/// Declaration order is the detection order: when a message contains
/// keywords of several categories, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Stress,
    Sadness,
    Motivation,
    Loneliness,
    Anger,
    Confusion,
    Neutral,
}

impl Emotion {
    /// All categories in detection order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Anxiety,
        Emotion::Stress,
        Emotion::Sadness,
        Emotion::Motivation,
        Emotion::Loneliness,
        Emotion::Anger,
        Emotion::Confusion,
        Emotion::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anxiety => "anxiety",
            Self::Stress => "stress",
            Self::Sadness => "sadness",
            Self::Motivation => "motivation",
            Self::Loneliness => "loneliness",
            Self::Anger => "anger",
            Self::Confusion => "confusion",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered trigger words per emotion.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(Emotion, Vec<String>)>,
}

impl KeywordTable {
    /// Build a table. Keywords are lower-cased; entries keep the given order.
    pub fn new(entries: Vec<(Emotion, Vec<String>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(emotion, words)| (emotion, words.into_iter().map(|w| w.to_lowercase()).collect()))
            .collect();
        Self { entries }
    }

    /// Classify `text`: first category (in table order) with a keyword
    /// contained in the lower-cased text, else `Neutral`.
    pub fn detect(&self, text: &str) -> Emotion {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w.as_str())))
            .map(|(emotion, _)| *emotion)
            .unwrap_or(Emotion::Neutral)
    }

    pub fn keywords(&self, emotion: Emotion) -> &[String] {
        self.entries
            .iter()
            .find(|(e, _)| *e == emotion)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, &[String])> {
        self.entries.iter().map(|(e, words)| (*e, words.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeywordTable {
        KeywordTable::new(vec![
            (Emotion::Anxiety, vec!["Anxious".into(), "worried".into()]),
            (Emotion::Stress, vec!["stressed".into()]),
        ])
    }

    #[test]
    fn test_keywords_lowercased() {
        assert_eq!(table().keywords(Emotion::Anxiety), ["anxious", "worried"]);
    }

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(table().detect("I am WORRIED"), Emotion::Anxiety);
        assert_eq!(table().detect("so Stressed out"), Emotion::Stress);
    }

    #[test]
    fn test_detect_table_order_wins() {
        assert_eq!(table().detect("stressed and anxious"), Emotion::Anxiety);
    }

    #[test]
    fn test_detect_fallback() {
        assert_eq!(table().detect(""), Emotion::Neutral);
        assert_eq!(table().detect("banana"), Emotion::Neutral);
    }

    #[test]
    fn test_serde_lowercase() {
        let e: Emotion = serde_json::from_str("\"loneliness\"").unwrap();
        assert_eq!(e, Emotion::Loneliness);
        assert_eq!(serde_json::to_string(&Emotion::Anger).unwrap(), "\"anger\"");
        assert_eq!(Emotion::Confusion.to_string(), "confusion");
    }
}
