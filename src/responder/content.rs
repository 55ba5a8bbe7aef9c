//! Content tables: keywords, exercises, stories and jokes.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;
use tracing::warn;

use super::defaults;
use super::emotion::{Emotion, KeywordTable};
use crate::config::ConfigError;

/// Keyword entry in a content file. A list keeps detection order explicit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordEntry {
    pub emotion: Emotion,
    pub words: Vec<String>,
}

/// Content overrides as read from the config file.
///
/// Each omitted table falls back to the built-in one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentFile {
    pub keywords: Option<Vec<KeywordEntry>>,
    pub exercises: Option<BTreeMap<Emotion, Vec<String>>>,
    pub stories: Option<BTreeMap<Emotion, Vec<String>>>,
    pub jokes: Option<Vec<String>>,
}

/// Immutable content served by the responder.
#[derive(Debug, Clone)]
pub struct Content {
    keywords: KeywordTable,
    exercises: BTreeMap<Emotion, Vec<String>>,
    stories: BTreeMap<Emotion, Vec<String>>,
    jokes: Vec<String>,
}

fn owned_table(table: &[(Emotion, &[&str])]) -> BTreeMap<Emotion, Vec<String>> {
    table
        .iter()
        .map(|(emotion, items)| (*emotion, items.iter().map(|s| s.to_string()).collect()))
        .collect()
}

fn builtin_keywords() -> KeywordTable {
    KeywordTable::new(
        defaults::KEYWORDS
            .iter()
            .map(|(emotion, words)| (*emotion, words.iter().map(|w| w.to_string()).collect()))
            .collect(),
    )
}

impl Content {
    pub fn new(
        keywords: KeywordTable,
        exercises: BTreeMap<Emotion, Vec<String>>,
        stories: BTreeMap<Emotion, Vec<String>>,
        jokes: Vec<String>,
    ) -> Self {
        Self { keywords, exercises, stories, jokes }
    }

    /// The tables the bot ships with.
    pub fn builtin() -> Self {
        Self {
            keywords: builtin_keywords(),
            exercises: owned_table(defaults::EXERCISES),
            stories: owned_table(defaults::STORIES),
            jokes: defaults::JOKES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Merge file overrides over the built-in tables.
    pub fn from_file(file: ContentFile) -> Self {
        let keywords = match file.keywords {
            Some(entries) => KeywordTable::new(entries.into_iter().map(|e| (e.emotion, e.words)).collect()),
            None => builtin_keywords(),
        };
        Self {
            keywords,
            exercises: file.exercises.unwrap_or_else(|| owned_table(defaults::EXERCISES)),
            stories: file.stories.unwrap_or_else(|| owned_table(defaults::STORIES)),
            jokes: file
                .jokes
                .unwrap_or_else(|| defaults::JOKES.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn detect_emotion(&self, text: &str) -> Emotion {
        self.keywords.detect(text)
    }

    pub fn exercises(&self, emotion: Emotion) -> &[String] {
        self.exercises.get(&emotion).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stories(&self, emotion: Emotion) -> &[String] {
        self.stories.get(&emotion).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stories of every category, in category order.
    pub fn all_stories(&self) -> Vec<&String> {
        self.stories.values().flatten().collect()
    }

    pub fn jokes(&self) -> &[String] {
        &self.jokes
    }

    /// Keywords declared for more than one category, with the category that
    /// wins detection and the one that is shadowed.
    pub fn shadowed_keywords(&self) -> Vec<(String, Emotion, Emotion)> {
        let mut first_owner: HashMap<&str, Emotion> = HashMap::new();
        let mut shadowed = Vec::new();
        for (emotion, words) in self.keywords.iter() {
            for word in words {
                match first_owner.get(word.as_str()) {
                    Some(&owner) if owner != emotion => shadowed.push((word.clone(), owner, emotion)),
                    Some(_) => {}
                    None => {
                        first_owner.insert(word.as_str(), emotion);
                    }
                }
            }
        }
        shadowed
    }

    /// Check the tables before serving from them.
    ///
    /// Every category but `Neutral` needs keywords and exercises; `Neutral`
    /// must have none. Jokes and the combined story list must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut declared = HashSet::new();
        for (emotion, words) in self.keywords.iter() {
            if !declared.insert(emotion) {
                return Err(ConfigError::Validation(format!("keywords for '{emotion}' are declared more than once")));
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(ConfigError::Validation(format!("empty keyword for '{emotion}'")));
            }
        }

        for emotion in Emotion::ALL {
            let keywords = self.keywords.keywords(emotion);
            let exercises = self.exercises(emotion);
            let stories = self.stories(emotion);

            if emotion == Emotion::Neutral {
                if !keywords.is_empty() || !exercises.is_empty() || !stories.is_empty() {
                    return Err(ConfigError::Validation(
                        "neutral is the fallback category and must not have keywords, exercises or stories".into(),
                    ));
                }
                continue;
            }

            if keywords.is_empty() {
                return Err(ConfigError::Validation(format!("no keywords for '{emotion}'")));
            }
            if exercises.is_empty() {
                return Err(ConfigError::Validation(format!("no exercises for '{emotion}'")));
            }
            if exercises.iter().chain(stories).any(|s| s.trim().is_empty()) {
                return Err(ConfigError::Validation(format!("empty exercise or story for '{emotion}'")));
            }
            if stories.is_empty() {
                warn!("No stories for '{emotion}', story requests will draw from all categories");
            }
        }

        if self.jokes.is_empty() || self.jokes.iter().any(|j| j.trim().is_empty()) {
            return Err(ConfigError::Validation("jokes must be a non-empty list of non-empty strings".into()));
        }
        if self.all_stories().is_empty() {
            return Err(ConfigError::Validation("at least one story is required".into()));
        }

        for (word, winner, shadowed) in self.shadowed_keywords() {
            warn!("Keyword '{word}' is declared for both '{winner}' and '{shadowed}'; '{winner}' wins");
        }

        Ok(())
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}
