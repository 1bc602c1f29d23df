// user-facing messages and reply formatting

pub struct Output;

impl Output {
    pub const REJECTED: &'static str =
        "Your input violated the moderation policy. Please rephrase.";

    pub const REDACTION_NOTICE: &'static str =
        "Output contained restricted terms. Showing redacted version:";

    pub const CANCELLED: &'static str = "Session cancelled.";

    pub fn reply(text: &str) -> String {
        format!("Gemini says:\n{text}")
    }
}
