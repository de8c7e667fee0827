//! Korean strategy: dictionary → jamo romanization + correction passes →
//! dictionary fallback.
//!
//! Romanization decomposes each precomposed Hangul syllable arithmetically
//! (U+AC00 block layout) into initial/medial/final jamo and concatenates
//! their Revised-Romanization values. The raw output is then corrected in
//! two ordered passes: conventional spelling, then hyphenation of
//! two-block given names.

use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::{
    ConvertOptions, Strategy, StrategyError, Tiers, apply_word_rules, title_case,
};
use crate::tables::DictionaryOverlay;
use crate::tables::korean as data;
use std::sync::Arc;
use tracing::warn;

const HANGUL_BASE: u32 = 0xAC00;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

pub struct KoreanStrategy {
    romanizer_enabled: bool,
    overlay: Arc<DictionaryOverlay>,
}

impl KoreanStrategy {
    pub fn new(romanizer_enabled: bool, overlay: Arc<DictionaryOverlay>) -> Self {
        Self {
            romanizer_enabled,
            overlay,
        }
    }

    fn dictionary(&self, text: &str, role: NameRole) -> Option<&str> {
        if let Some(hit) = self.overlay.lookup(Script::Korean, role, text) {
            return Some(hit);
        }
        let table = match role {
            NameRole::Given => &data::GIVEN,
            NameRole::Family => &data::FAMILY,
        };
        table.get(text).copied()
    }

    fn fallback_text(&self, text: &str) -> String {
        data::FAMILY
            .get(text)
            .or_else(|| data::GIVEN.get(text))
            .map(|s| (*s).to_owned())
            .unwrap_or_else(|| {
                text.chars()
                    .map(|c| if script::is_hangul(c) { '?' } else { c })
                    .collect()
            })
    }

    fn romanizer_tier(&self, text: &str) -> Option<FieldOutcome> {
        if !self.romanizer_enabled {
            return None;
        }
        match romanize_hangul(text) {
            Ok(raw) => {
                let cased = title_case(&raw);
                let spelled = apply_word_rules(&cased, data::SPELLING);
                let hyphenated = hyphenate(&spelled);
                Some(FieldOutcome::new(
                    hyphenated,
                    0.85,
                    Method::LibraryConversion,
                ))
            }
            Err(e) => {
                warn!(error = %e, "korean romanizer failed; using dictionary fallback");
                Some(FieldOutcome::new(
                    self.fallback_text(text),
                    0.5,
                    Method::ErrorFallback,
                ))
            }
        }
    }
}

impl Strategy for KoreanStrategy {
    fn name(&self) -> &'static str {
        "korean"
    }

    fn convert(
        &self,
        text: &str,
        role: NameRole,
        _opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        if !script::contains_script(text, Script::Korean) {
            return Err(StrategyError::ScriptMismatch(Script::Korean));
        }

        Ok(Tiers::start(text)
            .attempt(|t| {
                self.dictionary(t, role)
                    .map(|hit| FieldOutcome::new(hit, 0.95, Method::ExactDictionaryMatch))
            })
            .attempt(|t| self.romanizer_tier(t))
            .finish(|t| FieldOutcome::new(self.fallback_text(t), 0.6, Method::CharacterMap)))
    }
}

/// Letter-level Revised Romanization of the precomposed syllable block.
/// Compatibility jamo and anything else Hangul-adjacent but not
/// decomposable is an error; whole-syllable text is the supported input.
fn romanize_hangul(text: &str) -> Result<String, StrategyError> {
    let mut out = String::with_capacity(text.len());
    let mut converted = 0usize;
    for c in text.chars() {
        if script::is_hangul_syllable(c) {
            let code = c as u32 - HANGUL_BASE;
            let initial = (code / (MEDIAL_COUNT * FINAL_COUNT)) as usize;
            let medial = ((code % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT) as usize;
            let final_ = (code % FINAL_COUNT) as usize;
            out.push_str(data::INITIALS[initial]);
            out.push_str(data::MEDIALS[medial]);
            out.push_str(data::FINALS[final_]);
            converted += 1;
        } else {
            out.push(c);
        }
    }
    if converted == 0 {
        return Err(StrategyError::EngineFailed {
            engine: "hangul-rr",
            message: "no decomposable syllables in input".into(),
        });
    }
    Ok(out)
}

/// Hyphenation pass: explicit syllable-pair patterns first, then the
/// generic two-block CamelCase split. The generic split is a heuristic
/// and may mis-divide names outside the two-block convention.
fn hyphenate(text: &str) -> String {
    text.split(' ')
        .map(hyphenate_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn hyphenate_word(word: &str) -> String {
    if word.contains('-') {
        return word.to_owned();
    }
    for &(first, second) in data::HYPHEN_PAIRS {
        if word.len() == first.len() + second.len()
            && word.starts_with(first)
            && word.ends_with(second)
        {
            return format!("{first}-{second}");
        }
    }
    generic_split(word).unwrap_or_else(|| word.to_owned())
}

/// Split `Xxxx…Yyyy…` (exactly two title-cased runs, each at least two
/// letters) at the internal uppercase boundary.
fn generic_split(word: &str) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 4 || !chars[0].is_ascii_uppercase() {
        return None;
    }
    let mut boundary = None;
    for (i, c) in chars.iter().enumerate().skip(1) {
        if c.is_ascii_uppercase() {
            if boundary.is_some() {
                return None; // three or more blocks
            }
            boundary = Some(i);
        } else if !c.is_ascii_lowercase() {
            return None;
        }
    }
    let b = boundary?;
    if b < 2 || chars.len() - b < 2 {
        return None;
    }
    let (head, tail) = word.split_at(word.char_indices().nth(b).map(|(i, _)| i)?);
    Some(format!("{head}-{tail}"))
}
