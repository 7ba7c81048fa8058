// Unit tests for answer normalization.
//
// Covers the leading-token rules and the YES-only substring scan that
// resolves answers which don't start with a verdict.

use chatwarden::moderation::normalize::{is_harmful_answer, parse_answer, Answer};

#[test]
fn exact_yes_is_harmful() {
    assert!(is_harmful_answer("YES"));
}

#[test]
fn exact_no_is_not_harmful() {
    assert!(!is_harmful_answer("NO"));
}

#[test]
fn lowercase_and_padding_are_normalized() {
    assert!(is_harmful_answer("  yes\n"));
    assert!(!is_harmful_answer("\tNo "));
}

#[test]
fn sentence_starting_with_yes_is_harmful() {
    let answer = "Yes, this message is harmful because it contains a slur.";
    assert_eq!(parse_answer(answer), Answer::Yes);
    assert!(is_harmful_answer(answer));
}

#[test]
fn sentence_starting_with_no_is_not_harmful_even_if_yes_appears_later() {
    let answer = "No. If it said yes I would flag it.";
    assert_eq!(parse_answer(answer), Answer::No);
    assert!(!is_harmful_answer(answer));
}

#[test]
fn prefix_match_is_not_word_bounded() {
    // "YESTERDAY" starts with YES and "NOTHING" starts with NO
    assert_eq!(parse_answer("Yesterday's chat was fine"), Answer::Yes);
    assert_eq!(parse_answer("Nothing harmful here"), Answer::No);
}

#[test]
fn ambiguous_answer_mentioning_yes_is_harmful() {
    let answer = "Hard to say. Leaning yes given the context.";
    assert_eq!(parse_answer(answer), Answer::Ambiguous { mentions_yes: true });
    assert!(is_harmful_answer(answer));
}

#[test]
fn ambiguous_answer_ending_in_no_is_not_harmful() {
    // The scan only looks for YES; a trailing NO is never consulted, and
    // with no YES present the scan falls through to not harmful.
    let answer = "I'm not sure, but possibly NO";
    assert_eq!(
        parse_answer(answer),
        Answer::Ambiguous {
            mentions_yes: false
        }
    );
    assert!(!is_harmful_answer(answer));
}

#[test]
fn scan_is_asymmetric() {
    // Same hedge, opposite tokens: only the one containing YES flips
    assert!(is_harmful_answer("Unclear, maybe YES"));
    assert!(!is_harmful_answer("Unclear, maybe NO"));
}

#[test]
fn multiline_answer_uses_leading_token() {
    assert!(is_harmful_answer("YES\nReason: harassment"));
    assert!(!is_harmful_answer("NO\nThis is banter, YES it's rude but fine"));
}
