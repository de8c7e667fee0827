//! Arabic strategy: dictionary → mixed per-word → IJMES library tier →
//! character map → placeholder.

use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::{ConvertOptions, Strategy, StrategyError, Tiers, title_case};
use crate::tables::arabic as data;
use crate::tables::DictionaryOverlay;
use std::sync::Arc;
use tracing::debug;

// Longest key in the literal/char maps, in chars ("عبد ال").
const MAX_KEY_CHARS: usize = 6;

pub struct ArabicStrategy {
    library_enabled: bool,
    overlay: Arc<DictionaryOverlay>,
}

impl ArabicStrategy {
    pub fn new(library_enabled: bool, overlay: Arc<DictionaryOverlay>) -> Self {
        Self {
            library_enabled,
            overlay,
        }
    }

    fn dictionary(&self, text: &str, role: NameRole) -> Option<&str> {
        if let Some(hit) = self.overlay.lookup(Script::Arabic, role, text) {
            return Some(hit);
        }
        let table = match role {
            NameRole::Given => &data::GIVEN,
            NameRole::Family => &data::FAMILY,
        };
        table.get(text).copied()
    }

    /// Role-agnostic lookup used by the per-word tier: a family name can
    /// appear inside a compound given name and vice versa.
    fn any_dictionary(&self, word: &str) -> Option<&str> {
        self.dictionary(word, NameRole::Given)
            .or_else(|| self.dictionary(word, NameRole::Family))
    }

    fn mixed_words(&self, text: &str) -> Option<FieldOutcome> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < 2 {
            return None;
        }
        let mut matched = 0usize;
        let parts: Vec<String> = words
            .iter()
            .map(|w| match self.any_dictionary(w) {
                Some(hit) => {
                    matched += 1;
                    hit.to_owned()
                }
                None => char_map(w),
            })
            .collect();
        if matched == 0 {
            return None;
        }
        let ratio = matched as f64 / words.len() as f64;
        Some(FieldOutcome::new(
            parts.join(" "),
            0.95 + 0.03 * ratio,
            Method::MixedDictionaryMatch,
        ))
    }

    fn library(&self, text: &str) -> Option<FieldOutcome> {
        if !self.library_enabled {
            debug!("arabic library tier disabled; falling through");
            return None;
        }
        let romanized = ijmes_romanize(text);
        if romanized.is_empty() || romanized == text {
            return None;
        }
        let mut cleaned = romanized;
        for &(from, to) in data::DIACRITIC_STRIP {
            if cleaned.contains(from) {
                cleaned = cleaned.replace(from, to);
            }
        }
        Some(FieldOutcome::new(cleaned, 0.8, Method::LibraryConversion))
    }
}

impl Strategy for ArabicStrategy {
    fn name(&self) -> &'static str {
        "arabic"
    }

    fn convert(
        &self,
        text: &str,
        role: NameRole,
        _opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        if !script::contains_script(text, Script::Arabic) {
            return Err(StrategyError::ScriptMismatch(Script::Arabic));
        }

        let mut outcome = Tiers::start(text)
            .attempt(|t| {
                self.dictionary(t, role)
                    .map(|hit| FieldOutcome::new(hit, 0.98, Method::ExactDictionaryMatch))
            })
            .attempt(|t| self.mixed_words(t))
            .attempt(|t| self.library(t))
            .attempt(|t| {
                let mapped = char_map(t);
                (!mapped.trim().is_empty())
                    .then(|| FieldOutcome::new(mapped, 0.75, Method::CharacterMap))
            })
            .finish(|t| {
                let masked: String = t
                    .chars()
                    .map(|c| if script::is_arabic(c) { '?' } else { c })
                    .collect();
                FieldOutcome::new(masked, 0.5, Method::ErrorFallback)
            });

        outcome.text = title_case(&outcome.text);
        Ok(outcome)
    }
}

/// IJMES-style romanization: scholarly diacritics, stripped afterwards by
/// the rule table. Characters outside the scholarly map borrow the plain
/// map's value.
fn ijmes_romanize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let key: &str = c.encode_utf8(&mut buf);
        if let Some(v) = data::IJMES.get(key) {
            out.push_str(v);
        } else if let Some(v) = data::CHAR_MAP.get(key) {
            out.push_str(v);
        } else if let Some(v) = data::EXTENDED_FALLBACK.get(key) {
            out.push_str(v);
        } else if script::is_arabic(c) {
            out.push('?');
        } else {
            out.push(c);
        }
    }
    out
}

/// Tier-4 character map: longest-match-first over the literal overrides
/// and the plain letter map, then vowel insertion for bare consonant
/// skeletons, then cluster smoothing.
fn char_map(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let mut matched = false;
        let max_len = MAX_KEY_CHARS.min(chars.len() - i);
        for len in (1..=max_len).rev() {
            let candidate: String = chars[i..i + len].iter().collect();
            let hit = data::LITERAL_OVERRIDES
                .get(candidate.as_str())
                .or_else(|| data::CHAR_MAP.get(candidate.as_str()));
            if let Some(v) = hit {
                out.push_str(v);
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            let c = chars[i];
            let mut buf = [0u8; 4];
            let key: &str = c.encode_utf8(&mut buf);
            if let Some(v) = data::EXTENDED_FALLBACK.get(key) {
                out.push_str(v);
            } else if script::is_arabic(c) {
                out.push('?');
            } else {
                out.push(c);
            }
            i += 1;
        }
    }

    let voweled = out
        .split(' ')
        .map(insert_vowels)
        .collect::<Vec<_>>()
        .join(" ");
    smooth_clusters(&voweled)
}

const fn is_ascii_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

const fn is_digraph(a: char, b: char) -> bool {
    b == 'h' && matches!(a, 't' | 's' | 'k' | 'd' | 'g' | 'z' | 'c')
}

/// Unvocalized Arabic maps to bare consonant skeletons ("mhmd"); insert a
/// short `a` between consonants — but never inside a digraph — so the
/// result is at least pronounceable.
fn insert_vowels(word: &str) -> String {
    if word.chars().any(is_ascii_vowel) {
        return word.to_owned();
    }
    let consonants: Vec<char> = word.chars().collect();
    if consonants.len() < 2 {
        return word.to_owned();
    }
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in consonants.iter().enumerate() {
        out.push(*c);
        if let Some(next) = consonants.get(i + 1) {
            if c.is_ascii_alphabetic() && !is_digraph(*c, *next) {
                out.push('a');
            }
        }
    }
    out
}

/// Collapse runs of three or more vowels (or consonants) to their first
/// two; mapped digraph pile-ups otherwise produce unreadable output.
fn smooth_clusters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_is_vowel: Option<bool> = None;
    let mut run_len = 0usize;
    for c in text.chars() {
        let class = if c.is_ascii_alphabetic() {
            Some(is_ascii_vowel(c.to_ascii_lowercase()))
        } else {
            None
        };
        if class.is_some() && class == run_is_vowel {
            run_len += 1;
        } else {
            run_is_vowel = class;
            run_len = 1;
        }
        if run_len <= 2 {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> ArabicStrategy {
        ArabicStrategy::new(true, Arc::new(DictionaryOverlay::default()))
    }

    fn convert(s: &ArabicStrategy, text: &str, role: NameRole) -> FieldOutcome {
        s.convert(text, role, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn exact_dictionary_hit() {
        let s = strategy();
        let out = convert(&s, "محمد", NameRole::Given);
        assert_eq!(out.text, "Mohammed");
        assert_eq!(out.method, Method::ExactDictionaryMatch);
        assert!(out.accuracy >= 0.95);
    }

    #[test]
    fn family_role_uses_family_table() {
        let s = strategy();
        let out = convert(&s, "علي", NameRole::Family);
        assert_eq!(out.text, "Ali");
        assert_eq!(out.method, Method::ExactDictionaryMatch);
    }

    #[test]
    fn compound_name_is_exact_not_mixed() {
        let s = strategy();
        let out = convert(&s, "عبد الرحمن", NameRole::Given);
        assert_eq!(out.text, "Abdul Rahman");
        assert_eq!(out.method, Method::ExactDictionaryMatch);
    }

    #[test]
    fn mixed_match_scales_accuracy() {
        let s = strategy();
        // First word is a dictionary hit, second is mapped.
        let out = convert(&s, "محمد قصقص", NameRole::Given);
        assert_eq!(out.method, Method::MixedDictionaryMatch);
        assert!(out.text.starts_with("Mohammed "));
        assert!(out.accuracy > 0.95 && out.accuracy < 0.98);
    }

    #[test]
    fn library_tier_strips_ijmes_diacritics() {
        let s = strategy();
        let out = convert(&s, "شمس", NameRole::Given);
        assert_eq!(out.method, Method::LibraryConversion);
        assert_eq!(out.accuracy, 0.8);
        assert!(out.text.is_ascii(), "diacritics must be stripped: {}", out.text);
        assert!(out.text.to_ascii_lowercase().starts_with("sh"));
    }

    #[test]
    fn disabled_library_falls_to_char_map() {
        let s = ArabicStrategy::new(false, Arc::new(DictionaryOverlay::default()));
        let out = convert(&s, "شمس", NameRole::Given);
        assert_eq!(out.method, Method::CharacterMap);
        assert_eq!(out.accuracy, 0.75);
        assert!(!out.text.is_empty());
        assert!(out.text.is_ascii());
    }

    #[test]
    fn latin_input_is_rejected() {
        let s = strategy();
        let err = s
            .convert("Smith", NameRole::Family, &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, StrategyError::ScriptMismatch(Script::Arabic)));
    }

    #[test]
    fn vowel_insertion_on_bare_skeletons() {
        assert_eq!(insert_vowels("mhmd"), "mahamad");
        assert_eq!(insert_vowels("shms"), "shamas");
        assert_eq!(insert_vowels("ali"), "ali");
    }

    #[test]
    fn cluster_smoothing_caps_runs_at_two() {
        assert_eq!(smooth_clusters("strng"), "st");
        assert_eq!(smooth_clusters("aaae"), "aa");
        assert_eq!(smooth_clusters("ab"), "ab");
    }
}
