// Local blocklist — the deterministic first tier of classification.
//
// Matching is a case-insensitive substring test, not a whole-word match:
// "hateful" matches "hate". No network, no allocation beyond lowercasing
// the input once.

use std::collections::HashSet;

/// Terms that mark a message harmful without asking a provider.
pub const DEFAULT_TERMS: &[&str] = &[
    "hate",
    "slut",
    "bitch",
    "bastard",
    "whore",
    "motherfucker",
    "cunt",
    "nigger",
    "fag",
    "queer",
    "retard",
    "autistic",
    "kill yourself",
    "suicide",
    "rape",
    "pedophile",
    "molest",
    "slavery",
    "racist",
    "sexist",
    "abuse",
    "incest",
    "violence",
    "terrorist",
    "nazi",
    "neo-nazi",
    "antisemite",
    "blacklist",
    "sexism",
    "homophobia",
    "bigot",
    "feminazi",
    "rape culture",
];

/// Immutable set of lower-cased literal terms.
#[derive(Debug, Clone)]
pub struct Blocklist {
    terms: Vec<String>,
}

impl Blocklist {
    /// Build a blocklist from arbitrary terms. Blank terms are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// The built-in term list plus `extra`.
    pub fn with_extra_terms(extra: &[String]) -> Self {
        Self::new(
            DEFAULT_TERMS
                .iter()
                .map(|t| t.to_string())
                .chain(extra.iter().cloned()),
        )
    }

    /// Return the first term contained in `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .map(String::as_str)
    }

    pub fn is_blocked(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let list = Blocklist::default();
        assert_eq!(list.first_match("That was HATEFUL"), Some("hate"));
        assert_eq!(list.first_match("go Kill Yourself"), Some("kill yourself"));
        assert!(list.is_blocked("NaZiS everywhere"));
    }

    #[test]
    fn banter_is_not_blocked() {
        let list = Blocklist::default();
        assert!(!list.is_blocked("get rekt noob, L + ratio"));
        assert!(!list.is_blocked(""));
    }

    #[test]
    fn extra_terms_are_normalized() {
        let list = Blocklist::with_extra_terms(&["  CrInGe ".to_string(), "".to_string()]);
        assert_eq!(list.len(), DEFAULT_TERMS.len() + 1);
        assert_eq!(list.first_match("so cringe"), Some("cringe"));
    }

    #[test]
    fn duplicate_terms_are_kept_once_in_first_seen_order() {
        let list = Blocklist::with_extra_terms(&["HATE".to_string(), "nazi".to_string()]);
        assert_eq!(list.len(), DEFAULT_TERMS.len());

        let list = Blocklist::new(["b", "a", "B", "c", "a"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.first_match("a b c"), Some("b"));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = Blocklist::new(Vec::<String>::new());
        assert!(list.is_empty());
        assert!(!list.is_blocked("hate"));
    }
}
