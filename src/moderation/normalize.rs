// Answer normalization — free-form provider text to a verdict.
//
// Providers are asked for a bare YES or NO but don't always comply. The
// ladder below takes a leading token first and only then scans the whole
// answer. The scan looks for YES and never for NO, so an ambiguous answer
// that mentions YES anywhere is treated as harmful.

/// How a provider's answer was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Answer leads with YES
    Yes,
    /// Answer leads with NO
    No,
    /// No leading token; `mentions_yes` is the result of the substring scan
    Ambiguous { mentions_yes: bool },
}

impl Answer {
    pub fn is_harmful(self) -> bool {
        match self {
            Answer::Yes => true,
            Answer::No => false,
            Answer::Ambiguous { mentions_yes } => mentions_yes,
        }
    }
}

/// Classify raw provider text.
pub fn parse_answer(raw: &str) -> Answer {
    let normalized = raw.trim().to_uppercase();
    let first_token = normalized.split_whitespace().next().unwrap_or("");

    if normalized.starts_with("YES") || first_token == "YES" {
        Answer::Yes
    } else if normalized.starts_with("NO") || first_token == "NO" {
        Answer::No
    } else {
        Answer::Ambiguous {
            mentions_yes: normalized.contains("YES"),
        }
    }
}

/// Shorthand for `parse_answer(raw).is_harmful()`.
pub fn is_harmful_answer(raw: &str) -> bool {
    parse_answer(raw).is_harmful()
}
