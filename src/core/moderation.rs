// keyword moderation
// catches the obvious stuff, nothing clever

/// Fixed lowercase keywords that trigger moderation action.
pub const BANNED_KEYWORDS: &[&str] = &[
    "kill",
    "murder",
    "assassinate",
    "harm",
    "hurt",
    "hack",
    "exploit",
    "breach",
    "unauthorized access",
    "bomb",
    "explosive",
    "weapon",
    "terrorist",
    "hate",
    "discriminate",
    "racist",
    "sexist",
];

pub struct Moderation {
    keywords: &'static [&'static str],
}

impl Moderation {
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    /// Does the text contain any banned keyword?
    ///
    /// Plain substring match against the lowercased text, no word
    /// boundaries: "harmful" trips on "harm".
    pub fn violates_policy(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();
        self.keywords.iter().any(|word| text_lower.contains(word))
    }

    /// Replace every keyword occurrence with a single `*`, in list order.
    ///
    /// Matching here is case-sensitive against the literal keyword, unlike
    /// `violates_policy`, so a capitalized keyword survives redaction even
    /// though it trips the check. Inherited behavior, kept as-is.
    pub fn redact_text(&self, text: &str) -> String {
        let mut redacted = text.to_string();
        for word in self.keywords {
            redacted = redacted.replace(word, "*");
        }
        redacted
    }
}

impl Default for Moderation {
    fn default() -> Self {
        Self::new(BANNED_KEYWORDS)
    }
}
