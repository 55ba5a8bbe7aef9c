//! Responder module - keyword emotion detection and scripted replies.

pub mod content;
pub mod defaults;
pub mod emotion;
pub mod engine;
pub mod state;


pub use content::{Content, ContentFile, KeywordEntry};
pub use emotion::{Emotion, KeywordTable};
pub use engine::{Reply, Responder, is_bot_command};
pub use state::ConversationState;
