//! Per-script conversion strategy abstraction.
//!
//! A strategy converts ONE name field to Latin text, reporting a heuristic
//! accuracy and the method that produced the text. Inside a strategy,
//! competing techniques are ordered into an explicit fallback chain
//! ([`Tiers`]): each tier either produces an outcome or declines, and the
//! terminal tier must always produce. Failures a strategy cannot absorb —
//! wrong script, missing engine — surface as [`StrategyError`] and are the
//! router's signal to try the next routing tier.

pub mod arabic;
pub mod charmap;
pub mod chinese;
pub mod general;
pub mod japanese;
pub mod korean;
pub mod latin;

use crate::request::{FieldOutcome, NameRole};
use crate::script::Script;
use thiserror::Error;

/// Failures that escape a strategy. Never escapes the router.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("input contains no {0:?} codepoints")]
    ScriptMismatch(Script),
    #[error("conversion engine `{0}` unavailable")]
    EngineUnavailable(&'static str),
    #[error("conversion engine `{engine}` failed: {message}")]
    EngineFailed {
        engine: &'static str,
        message: String,
    },
}

/// Per-request knobs threaded through every strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Macron-free output (Japanese passport-style romaji).
    pub normalized: bool,
}

/// One script's conversion algorithm.
pub trait Strategy: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Convert a single field. Implementations must be deterministic and
    /// must not panic on any input.
    fn convert(
        &self,
        text: &str,
        role: NameRole,
        opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError>;
}

// ---------------------------------------------------------------------------
// Fallback chain
// ---------------------------------------------------------------------------

/// Ordered fallback chain over one input string.
///
/// `attempt` tiers run until the first one produces an outcome; `finish`
/// closes the chain with a tier that cannot decline. Keeping the chain a
/// value (rather than nested `or_else` closures) makes each tier
/// independently visible and testable.
pub(crate) struct Tiers<'a> {
    text: &'a str,
    outcome: Option<FieldOutcome>,
}

impl<'a> Tiers<'a> {
    pub(crate) fn start(text: &'a str) -> Self {
        Self {
            text,
            outcome: None,
        }
    }

    pub(crate) fn attempt(mut self, tier: impl FnOnce(&str) -> Option<FieldOutcome>) -> Self {
        if self.outcome.is_none() {
            self.outcome = tier(self.text);
        }
        self
    }

    pub(crate) fn finish(self, tier: impl FnOnce(&str) -> FieldOutcome) -> FieldOutcome {
        match self.outcome {
            Some(outcome) => outcome,
            None => tier(self.text),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared text helpers
// ---------------------------------------------------------------------------

/// Capitalize the first letter of each whitespace-separated word and
/// lower-case the rest. Non-ASCII letters keep their full uppercase
/// mapping ("ǆ" expands correctly).
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Upper-case the first letter of each whitespace-separated word, leaving
/// the rest of the word untouched (so "McDonald" survives).
pub(crate) fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace whole-word occurrences of `from` with `to`.
///
/// A match must sit on word boundaries of the input; `from` itself may
/// span several words (hyphenated keys like "Ji-yoo" match as a unit).
pub(crate) fn replace_word(text: &str, from: &str, to: &str) -> String {
    debug_assert!(!from.is_empty());
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        let boundary_before = prev.is_none_or(|c| !is_word_char(c));
        if boundary_before && rest.starts_with(from) {
            let after = &rest[from.len()..];
            if after.chars().next().is_none_or(|c| !is_word_char(c)) {
                out.push_str(to);
                prev = from.chars().next_back();
                i += from.len();
                continue;
            }
        }
        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        prev = Some(c);
        i += c.len_utf8();
    }
    out
}

/// Apply an ordered whole-word rule table over the string. Rules are
/// applied sequentially, so later rules see the output of earlier ones —
/// several tables rely on that chaining.
pub(crate) fn apply_word_rules(text: &str, rules: &[(&str, &str)]) -> String {
    let mut current = text.to_owned();
    for &(from, to) in rules {
        if from != to && current.contains(from) {
            current = replace_word(&current, from, to);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("mohammed ali"), "Mohammed Ali");
        assert_eq!(title_case("JOSE"), "Jose");
        assert_eq!(title_case("tarō"), "Tarō");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn capitalize_words_preserves_inner_case() {
        assert_eq!(capitalize_words("mcDonald"), "McDonald");
        assert_eq!(capitalize_words("IVAN"), "IVAN");
        assert_eq!(capitalize_words("jose luis"), "Jose Luis");
    }

    #[test]
    fn replace_word_respects_boundaries() {
        assert_eq!(replace_word("Gim", "Gim", "Kim"), "Kim");
        assert_eq!(replace_word("Gimmy", "Gim", "Kim"), "Gimmy");
        assert_eq!(replace_word("Kyung-soo Gim", "Gim", "Kim"), "Kyung-soo Kim");
        // Hyphenated keys match as a unit.
        assert_eq!(replace_word("Ji-yoo", "Ji-yoo", "Ji-yu"), "Ji-yu");
        // A hyphen is a boundary, so the tail of a hyphenated word is a word.
        assert_eq!(replace_word("Ji-yoo", "yoo", "yu"), "Ji-yu");
        // A run-on repeat has no boundary before the second occurrence.
        assert_eq!(replace_word("GimGim", "Gim", "Kim"), "GimGim");
    }

    #[test]
    fn word_rules_chain_in_order() {
        let rules: &[(&str, &str)] = &[("Suhyeon", "Soo-hyun"), ("Soo-hyun", "Su-hyun")];
        assert_eq!(apply_word_rules("Suhyeon", rules), "Su-hyun");
    }

    #[test]
    fn tiers_stop_at_first_success() {
        let out = Tiers::start("x")
            .attempt(|_| None)
            .attempt(|_| Some(FieldOutcome::new("hit", 0.9, Method::CharacterMap)))
            .attempt(|_| Some(FieldOutcome::new("later", 0.1, Method::ErrorFallback)))
            .finish(|_| FieldOutcome::new("last", 0.0, Method::FallbackOriginal));
        assert_eq!(out.text, "hit");
        assert_eq!(out.accuracy, 0.9);
    }

    #[test]
    fn tiers_fall_to_finish() {
        let out = Tiers::start("x")
            .attempt(|_| None)
            .finish(|t| FieldOutcome::new(t, 0.5, Method::ErrorFallback));
        assert_eq!(out.text, "x");
    }
}
