// the relay - one moderated round trip to the model

use crate::Error;
use crate::core::Moderation;

const SYSTEM_PROMPT: &str = "\
You are a helpful and positive assistant.
Your primary goal is to provide concise, friendly, and informative answers.
You must always adhere strictly to all safety policies and never provide harmful instructions.";

const EMPTY_RESPONSE: &str = "(No response returned.)";

/// Anything that can turn a prompt into generated text.
///
/// `Gemini` is the real implementation; tests stub this out.
#[allow(async_fn_in_trait)]
pub trait Generate {
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}

/// Result of one chat turn.
pub enum Outcome {
    /// The input tripped the keyword filter; nothing was sent.
    Rejected,
    Reply(Reply),
}

/// One moderated model reply.
pub struct Reply {
    pub text: String,
    /// True when the output tripped the keyword filter and was redacted.
    pub redacted: bool,
}

pub struct Relay {
    moderation: Moderation,
}

impl Relay {
    pub fn new(moderation: Moderation) -> Self {
        Self { moderation }
    }

    /// Input-side check, usable before any client exists.
    pub fn input_allowed(&self, input: &str) -> bool {
        !self.moderation.violates_policy(input)
    }

    /// Send one prompt and moderate whatever comes back.
    ///
    /// Banned input fails closed here: the model is never called and the
    /// turn ends in `Outcome::Rejected`.
    pub async fn exchange<G: Generate>(&self, model: &G, input: &str) -> Result<Outcome, Error> {
        if !self.input_allowed(input) {
            return Ok(Outcome::Rejected);
        }

        let prompt = compose_prompt(input);
        let text = model.generate(&prompt).await?;

        let text = if text.is_empty() {
            EMPTY_RESPONSE.to_string()
        } else {
            text
        };

        if self.moderation.violates_policy(&text) {
            Ok(Outcome::Reply(Reply {
                text: self.moderation.redact_text(&text),
                redacted: true,
            }))
        } else {
            Ok(Outcome::Reply(Reply {
                text,
                redacted: false,
            }))
        }
    }
}

// system instruction and user input travel as one combined prompt string
fn compose_prompt(user: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\nUser: {user}\nAssistant:")
}
