// gemchat library - moderated chat relay to gemini

pub mod cli;
mod core;
mod error;
mod output;

pub use core::{BANNED_KEYWORDS, Gemini, Generate, Moderation, Outcome, Relay, Reply};
pub use error::Error;
pub use output::Output;
