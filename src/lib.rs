//! Meha - a Telegram bot that answers how-are-you-feeling messages with
//! coping exercises, short stories and jokes.

pub mod config;
pub mod keepalive;
pub mod responder;
