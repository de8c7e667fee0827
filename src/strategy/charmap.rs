//! Shared table-driven strategy for the pure character-map scripts
//! (Cyrillic, Greek, Thai, Devanagari).
//!
//! One stateless implementation, parameterized by script tag, map, and the
//! fixed accuracy the script earns. Lookup is longest-match-first so
//! multi-codepoint keys (Devanagari conjuncts) win over their parts;
//! unmapped characters pass through unchanged.

use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::{ConvertOptions, Strategy, StrategyError, capitalize_words};
use crate::tables::charmaps;
use phf::Map;

pub struct CharMapStrategy {
    name: &'static str,
    script: Script,
    map: &'static Map<&'static str, &'static str>,
    accuracy: f64,
    /// Longest key in the map, in chars.
    max_key_chars: usize,
}

impl CharMapStrategy {
    pub fn cyrillic() -> Self {
        Self {
            name: "cyrillic",
            script: Script::Cyrillic,
            map: &charmaps::CYRILLIC,
            accuracy: 0.9,
            max_key_chars: 1,
        }
    }

    pub fn greek() -> Self {
        Self {
            name: "greek",
            script: Script::Greek,
            map: &charmaps::GREEK,
            accuracy: 0.9,
            max_key_chars: 1,
        }
    }

    pub fn thai() -> Self {
        Self {
            name: "thai",
            script: Script::Thai,
            map: &charmaps::THAI,
            accuracy: 0.7,
            max_key_chars: 1,
        }
    }

    pub fn devanagari() -> Self {
        Self {
            name: "devanagari",
            script: Script::Devanagari,
            map: &charmaps::DEVANAGARI,
            accuracy: 0.8,
            max_key_chars: 3,
        }
    }

    fn map_text(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            let mut matched = false;
            let max_len = self.max_key_chars.min(chars.len() - i);
            for len in (1..=max_len).rev() {
                let candidate: String = chars[i..i + len].iter().collect();
                if let Some(v) = self.map.get(candidate.as_str()) {
                    out.push_str(v);
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }
}

impl Strategy for CharMapStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn convert(
        &self,
        text: &str,
        _role: NameRole,
        _opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        if !script::contains_script(text, self.script) {
            return Err(StrategyError::ScriptMismatch(self.script));
        }
        Ok(FieldOutcome::new(
            capitalize_words(&self.map_text(text)),
            self.accuracy,
            Method::CharacterMap,
        ))
    }
}
