//! Responder - turns one inbound message into a reply.
//!
//! Pure and synchronous: the caller owns the conversation state and the
//! random source, so the transport decides how to store and serialize them.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::content::Content;
use super::defaults;
use super::emotion::Emotion;
use super::state::ConversationState;
use crate::config::ConfigError;

/// Reply to a single inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Welcome text, present only on a conversation's first message.
    pub welcome: Option<String>,
    pub body: String,
}

impl Reply {
    /// Messages in send order.
    pub fn messages(&self) -> Vec<&str> {
        self.welcome.iter().map(String::as_str).chain([self.body.as_str()]).collect()
    }

    /// The whole reply as one string.
    pub fn text(&self) -> String {
        self.messages().join("\n\n")
    }
}

/// Bot commands such as `/start` are not conversation turns.
pub fn is_bot_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

/// Pick an entry other than `last` when the list allows it.
///
/// A single-entry list always yields that entry.
fn pick_fresh<'a, R: Rng + ?Sized>(items: &'a [String], last: Option<&str>, rng: &mut R) -> Option<&'a String> {
    if items.len() <= 1 {
        return items.first();
    }
    let candidates: Vec<&String> = items.iter().filter(|item| Some(item.as_str()) != last).collect();
    // Every entry equals `last` only when the list is one string repeated.
    candidates.choose(rng).copied().or_else(|| items.choose(rng))
}

/// Scripted emotion responder over validated content.
#[derive(Debug, Clone)]
pub struct Responder {
    content: Arc<Content>,
}

impl Responder {
    /// Validate `content` and build a responder over it.
    pub fn new(content: Content) -> Result<Self, ConfigError> {
        content.validate()?;
        Ok(Self { content: Arc::new(content) })
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn detect_emotion(&self, text: &str) -> Emotion {
        self.content.detect_emotion(text)
    }

    /// Story for `emotion`, or from all categories when it has none.
    pub fn pick_story<R: Rng + ?Sized>(&self, emotion: Emotion, rng: &mut R) -> &str {
        let own = self.content.stories(emotion);
        let story = if own.is_empty() {
            self.content.all_stories().choose(rng).copied()
        } else {
            own.choose(rng)
        };
        // validate() guarantees at least one story overall
        story.map(String::as_str).unwrap_or(defaults::GENERIC_PROMPT)
    }

    pub fn pick_joke<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.content
            .jokes()
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(defaults::GENERIC_PROMPT)
    }

    /// Handle one inbound message of a conversation.
    pub fn handle<R: Rng + ?Sized>(&self, state: &mut ConversationState, text: &str, rng: &mut R) -> Reply {
        let welcome = if state.greeted {
            None
        } else {
            state.greeted = true;
            Some(defaults::WELCOME.to_string())
        };

        let body = self.respond(state, text, rng);
        Reply { welcome, body }
    }

    fn respond<R: Rng + ?Sized>(&self, state: &mut ConversationState, text: &str, rng: &mut R) -> String {
        let normalized = text.trim().to_lowercase();
        if normalized == "quit" {
            return defaults::CLOSING.to_string();
        }

        let emotion = self.detect_emotion(&normalized);
        debug!("Detected emotion: {emotion}");

        let exercises = self.content.exercises(emotion);
        if let Some(exercise) = pick_fresh(exercises, state.last_exercise(emotion), rng) {
            state.set_last_exercise(emotion, exercise);
            return format!("{exercise}\n\n{}", defaults::EXERCISE_FOLLOW_UP);
        }

        if normalized.contains("joke") {
            return format!("{}\n{}", self.pick_joke(rng), defaults::JOKE_FOLLOW_UP);
        }

        if normalized.contains("story") {
            return format!("{}\n{}", self.pick_story(emotion, rng), defaults::STORY_FOLLOW_UP);
        }

        defaults::GENERIC_PROMPT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn items(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pick_fresh_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_fresh(&[], None, &mut rng), None);
    }

    #[test]
    fn test_pick_fresh_single_entry_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = items(&["only"]);
        assert_eq!(pick_fresh(&list, Some("only"), &mut rng).unwrap(), "only");
    }

    #[test]
    fn test_pick_fresh_two_entries_alternate() {
        let mut rng = StdRng::seed_from_u64(7);
        let list = items(&["a", "b"]);
        for _ in 0..50 {
            assert_eq!(pick_fresh(&list, Some("a"), &mut rng).unwrap(), "b");
            assert_eq!(pick_fresh(&list, Some("b"), &mut rng).unwrap(), "a");
        }
    }

    #[test]
    fn test_pick_fresh_all_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let list = items(&["same", "same"]);
        assert_eq!(pick_fresh(&list, Some("same"), &mut rng).unwrap(), "same");
    }

    #[test]
    fn test_bot_commands() {
        assert!(is_bot_command("/start"));
        assert!(is_bot_command(" /help me"));
        assert!(!is_bot_command("start"));
        assert!(!is_bot_command("I feel sad /start"));
        assert!(!is_bot_command(""));
    }

    #[test]
    fn test_reply_text_joins_messages() {
        let reply = Reply { welcome: Some("hi".into()), body: "there".into() };
        assert_eq!(reply.messages(), vec!["hi", "there"]);
        assert_eq!(reply.text(), "hi\n\nthere");

        let reply = Reply { welcome: None, body: "there".into() };
        assert_eq!(reply.text(), "there");
    }
}
