// core logic - moderation, the relay, and the gemini client

mod ai;
mod moderation;
mod relay;

pub use ai::Gemini;
pub use moderation::{BANNED_KEYWORDS, Moderation};
pub use relay::{Generate, Outcome, Relay, Reply};
