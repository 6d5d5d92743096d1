// ABOUTME: Phrase matching abstraction behind the classification rule table
// ABOUTME: Regex-backed patterns plus a keyword-subsequence alternative strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

//! # Phrase Matchers
//!
//! A rule needs exactly one capability from its pattern: does this
//! transcript match. Keeping that behind a trait lets alternative
//! strategies (keyword sets, fuzzy matching) slot into the classifier
//! without touching its control flow.

use regex::{Regex, RegexBuilder};

use crate::errors::{VoiceError, VoiceResult};

/// Single-capability matching abstraction used by classification rules
pub trait PhraseMatcher: Send + Sync {
    /// Whether the normalized transcript matches this phrase
    fn matches(&self, text: &str) -> bool;
}

/// Regex-backed phrase matcher
///
/// Patterns are matched case-insensitively anywhere in the transcript,
/// so "please start workout now" still matches `start\s+(?:a\s+)?workout`.
/// Optional filler words ("a", "the", "my", possessive "'s") are encoded
/// per-pattern, not applied globally.
#[derive(Debug, Clone)]
pub struct PhrasePattern {
    regex: Regex,
}

impl PhrasePattern {
    /// Compile a pattern string into a case-insensitive matcher
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError::InvalidPattern`] when the pattern fails to
    /// compile.
    pub fn new(pattern: &str) -> VoiceResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| VoiceError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// The source pattern string
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl PhraseMatcher for PhrasePattern {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Ordered keyword matcher
///
/// Matches when every keyword occurs in the transcript in order,
/// case-insensitively, with arbitrary text between them. An alternative
/// to [`PhrasePattern`] for grammars assembled at runtime where regex
/// escaping is unwanted.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Build a matcher from keywords checked in the given order
    #[must_use]
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

impl PhraseMatcher for KeywordMatcher {
    fn matches(&self, text: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        let mut rest = lowered.as_str();
        for keyword in &self.keywords {
            match rest.find(keyword.as_str()) {
                Some(index) => rest = &rest[index + keyword.len()..],
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_pattern_is_case_insensitive() {
        let pattern = PhrasePattern::new(r"rest\s+timer").unwrap();
        assert!(pattern.matches("REST TIMER"));
        assert!(pattern.matches("start Rest Timer"));
        assert!(!pattern.matches("restart imer"));
    }

    #[test]
    fn phrase_pattern_rejects_malformed_input() {
        let result = PhrasePattern::new(r"rest\s+(timer");
        assert!(matches!(
            result,
            Err(VoiceError::InvalidPattern { pattern, .. }) if pattern.contains("(timer")
        ));
    }

    #[test]
    fn keyword_matcher_requires_order() {
        let matcher = KeywordMatcher::new(&["body", "tracker"]);
        assert!(matcher.matches("open the Body Tracker please"));
        assert!(!matcher.matches("tracker of body"));
    }

    #[test]
    fn empty_keyword_matcher_matches_nothing() {
        let matcher = KeywordMatcher::new(&[]);
        assert!(!matcher.matches("anything"));
        assert!(!matcher.matches(""));
    }
}
