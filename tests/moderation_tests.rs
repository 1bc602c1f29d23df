// tests for keyword moderation

use gemchat::{BANNED_KEYWORDS, Moderation};

#[test]
fn test_keyword_list_contents() {
    assert_eq!(BANNED_KEYWORDS.len(), 17);
    for word in BANNED_KEYWORDS {
        assert_eq!(*word, word.to_lowercase());
    }
    assert!(BANNED_KEYWORDS.contains(&"hack"));
    assert!(BANNED_KEYWORDS.contains(&"unauthorized access"));
}

#[test]
fn test_clean_text_passes() {
    let moderation = Moderation::default();
    assert!(!moderation.violates_policy("What's the weather today?"));
}

#[test]
fn test_keyword_flagged() {
    let moderation = Moderation::default();
    assert!(moderation.violates_policy("How do I hack a server?"));
}

#[test]
fn test_uppercase_keyword_flagged() {
    let moderation = Moderation::default();
    assert!(moderation.violates_policy("HACK THE PLANET"));
}

#[test]
fn test_mixed_case_keyword_flagged() {
    let moderation = Moderation::default();
    assert!(moderation.violates_policy("Hate is a strong word"));
}

#[test]
fn test_substring_match_no_word_boundary() {
    let moderation = Moderation::default();
    // "harmful" contains "harm"
    assert!(moderation.violates_policy("Is this harmful?"));
}

#[test]
fn test_multi_word_keyword_flagged() {
    let moderation = Moderation::default();
    assert!(moderation.violates_policy("how to get unauthorized access to a system"));
}

#[test]
fn test_redact_clean_text_unchanged() {
    let moderation = Moderation::default();
    let text = "A perfectly pleasant sentence.";
    assert_eq!(moderation.redact_text(text), text);
}

#[test]
fn test_redact_replaces_keyword() {
    let moderation = Moderation::default();
    assert_eq!(moderation.redact_text("I hate mondays."), "I * mondays.");
}

#[test]
fn test_redact_replaces_every_occurrence() {
    let moderation = Moderation::default();
    assert_eq!(
        moderation.redact_text("a bomb is a bomb"),
        "a * is a *"
    );
}

#[test]
fn test_redact_multiple_keywords() {
    let moderation = Moderation::default();
    assert_eq!(
        moderation.redact_text("kill or murder"),
        "* or *"
    );
}

#[test]
fn test_redact_inside_word() {
    let moderation = Moderation::default();
    // substring replacement, so "harmful" loses its "harm"
    assert_eq!(moderation.redact_text("harmful"), "*ful");
}

#[test]
fn test_redact_second_pass_is_noop() {
    let moderation = Moderation::default();
    let once = moderation.redact_text("hate and hurt everywhere");
    let twice = moderation.redact_text(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_redact_is_case_sensitive() {
    let moderation = Moderation::default();
    // flagged by the case-insensitive check...
    assert!(moderation.violates_policy("Hate"));
    // ...but the capitalized form survives redaction untouched
    assert_eq!(moderation.redact_text("Hate"), "Hate");
}

#[test]
fn test_custom_keyword_list() {
    let moderation = Moderation::new(&["ferris"]);
    assert!(moderation.violates_policy("down with Ferris"));
    assert!(!moderation.violates_policy("How do I hack a server?"));
    assert_eq!(moderation.redact_text("ferris says hi"), "* says hi");
}
