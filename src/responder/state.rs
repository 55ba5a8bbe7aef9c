//! Per-conversation state.

use std::collections::HashMap;

use super::emotion::Emotion;

/// What the responder remembers about one conversation.
///
/// Lives in memory for the process lifetime; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    /// Set on the first inbound message, never cleared.
    pub greeted: bool,
    last_exercise: HashMap<Emotion, String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exercise most recently shown for `emotion`.
    pub fn last_exercise(&self, emotion: Emotion) -> Option<&str> {
        self.last_exercise.get(&emotion).map(String::as_str)
    }

    pub(crate) fn set_last_exercise(&mut self, emotion: Emotion, exercise: &str) {
        self.last_exercise.insert(emotion, exercise.to_string());
    }
}
