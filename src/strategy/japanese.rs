//! Japanese strategy: dictionary → kakasi romaji engine → dictionary
//! fallback, with macron restoration and the post-hoc `normalized` flag.

use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::{
    ConvertOptions, Strategy, StrategyError, Tiers, apply_word_rules, title_case,
};
use crate::tables::DictionaryOverlay;
use crate::tables::japanese as data;
use std::sync::Arc;
use tracing::warn;

/// Morphological romanization engine, warmed up once at service
/// construction. Requests arriving after a failed warm-up see `None` in
/// the strategy and deterministically take the dictionary fallback.
pub(crate) struct RomajiEngine(());

impl RomajiEngine {
    pub(crate) fn warm_up() -> Result<Self, StrategyError> {
        // Probe conversion: forces the embedded dictionary in and proves
        // the engine produces output.
        let probe = kakasi::convert("山");
        if probe.romaji.trim().is_empty() {
            return Err(StrategyError::EngineFailed {
                engine: "kakasi",
                message: "warm-up probe produced no output".into(),
            });
        }
        Ok(Self(()))
    }

    fn romanize(&self, text: &str) -> Result<String, StrategyError> {
        let romaji = kakasi::convert(text).romaji;
        let romaji = romaji.trim();
        if romaji.is_empty() {
            return Err(StrategyError::EngineFailed {
                engine: "kakasi",
                message: format!("no romaji for {text:?}"),
            });
        }
        Ok(romaji.to_owned())
    }
}

pub struct JapaneseStrategy {
    engine: Option<RomajiEngine>,
    overlay: Arc<DictionaryOverlay>,
}

impl JapaneseStrategy {
    pub fn new(enable_engine: bool, overlay: Arc<DictionaryOverlay>) -> Self {
        let engine = if enable_engine {
            match RomajiEngine::warm_up() {
                Ok(engine) => Some(engine),
                Err(e) => {
                    warn!(error = %e, "japanese engine warm-up failed; dictionary fallback only");
                    None
                }
            }
        } else {
            None
        };
        Self { engine, overlay }
    }

    pub fn engine_ready(&self) -> bool {
        self.engine.is_some()
    }

    fn dictionary(&self, text: &str, role: NameRole) -> Option<&str> {
        if let Some(hit) = self.overlay.lookup(Script::Japanese, role, text) {
            return Some(hit);
        }
        let table = match role {
            NameRole::Given => &data::GIVEN,
            NameRole::Family => &data::FAMILY,
        };
        table.get(text).copied()
    }

    /// Tier-3 fallback: role-agnostic dictionary, then `?`-masking.
    fn fallback_text(&self, text: &str) -> String {
        data::GIVEN
            .get(text)
            .or_else(|| data::FAMILY.get(text))
            .map(|s| (*s).to_owned())
            .unwrap_or_else(|| {
                text.chars()
                    .map(|c| {
                        if script::is_kana(c) || script::is_han(c) || script::is_japanese_mark(c) {
                            '?'
                        } else {
                            c
                        }
                    })
                    .collect()
            })
    }

    fn engine_tier(&self, text: &str, normalized: bool) -> Option<FieldOutcome> {
        let engine = self.engine.as_ref()?;
        match engine.romanize(text) {
            Ok(romaji) => {
                let mut out = title_case(&romaji.to_lowercase());
                if !normalized {
                    out = apply_word_rules(&out, data::MACRON_RESTORE);
                }
                Some(FieldOutcome::new(out, 0.85, Method::LibraryConversion))
            }
            Err(e) => {
                // Engine exceptions land on the dictionary path with the
                // degraded score, not on the normal fallback score.
                warn!(error = %e, "japanese engine failed; using dictionary fallback");
                Some(FieldOutcome::new(
                    self.fallback_text(text),
                    0.5,
                    Method::ErrorFallback,
                ))
            }
        }
    }
}

impl Strategy for JapaneseStrategy {
    fn name(&self) -> &'static str {
        "japanese"
    }

    fn convert(
        &self,
        text: &str,
        role: NameRole,
        opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        if !script::contains_script(text, Script::Japanese) {
            return Err(StrategyError::ScriptMismatch(Script::Japanese));
        }

        let mut outcome = Tiers::start(text)
            .attempt(|t| {
                self.dictionary(t, role)
                    .map(|hit| FieldOutcome::new(hit, 0.95, Method::ExactDictionaryMatch))
            })
            .attempt(|t| self.engine_tier(t, opts.normalized))
            .finish(|t| FieldOutcome::new(self.fallback_text(t), 0.6, Method::CharacterMap));

        // Post-hoc normalization is independent of the producing tier.
        if opts.normalized {
            outcome.text = strip_macrons(&outcome.text);
        }
        Ok(outcome)
    }
}

fn strip_macrons(text: &str) -> String {
    text.chars()
        .map(|c| {
            data::MACRON_STRIP
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> JapaneseStrategy {
        JapaneseStrategy::new(true, Arc::new(DictionaryOverlay::default()))
    }

    fn no_engine() -> JapaneseStrategy {
        JapaneseStrategy::new(false, Arc::new(DictionaryOverlay::default()))
    }

    fn convert(s: &JapaneseStrategy, text: &str, role: NameRole) -> FieldOutcome {
        s.convert(text, role, &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn exact_dictionary_hit_keeps_macrons() {
        let s = strategy();
        let out = convert(&s, "太郎", NameRole::Given);
        assert_eq!(out.text, "Tarō");
        assert_eq!(out.accuracy, 0.95);
        assert_eq!(out.method, Method::ExactDictionaryMatch);
    }

    #[test]
    fn surname_dictionary() {
        let s = strategy();
        let out = convert(&s, "山田", NameRole::Family);
        assert_eq!(out.text, "Yamada");
        assert_eq!(out.method, Method::ExactDictionaryMatch);
    }

    #[test]
    fn normalized_flag_strips_macrons_from_dictionary_hits() {
        let s = strategy();
        let opts = ConvertOptions { normalized: true };
        let out = s.convert("太郎", NameRole::Given, &opts).unwrap();
        assert_eq!(out.text, "Taro");
        assert_eq!(out.method, Method::ExactDictionaryMatch);
    }

    #[test]
    fn engine_tier_handles_kana() {
        let s = strategy();
        if !s.engine_ready() {
            return;
        }
        // ひかり is not in the dictionaries; the engine romanizes it.
        let out = convert(&s, "ひかり", NameRole::Given);
        assert_eq!(out.method, Method::LibraryConversion);
        assert_eq!(out.accuracy, 0.85);
        assert_eq!(out.text, "Hikari");
    }

    #[test]
    fn without_engine_falls_to_dictionary() {
        let s = no_engine();
        // 優 is in the given-name table.
        let out = convert(&s, "優", NameRole::Given);
        assert_eq!(out.text, "Yū");
        // Comes through tier 1 (exact), so still 0.95.
        assert_eq!(out.method, Method::ExactDictionaryMatch);

        // A name absent from every table masks to placeholders.
        let out = convert(&s, "龍之介", NameRole::Given);
        assert_eq!(out.method, Method::CharacterMap);
        assert_eq!(out.accuracy, 0.6);
        assert_eq!(out.text, "???");
    }

    #[test]
    fn latin_input_is_rejected() {
        let s = no_engine();
        let err = s
            .convert("Smith", NameRole::Given, &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, StrategyError::ScriptMismatch(Script::Japanese)));
    }

    #[test]
    fn macron_restoration_applies_to_engine_output() {
        // Direct rule-table check: the engine's flat output gains macrons.
        assert_eq!(apply_word_rules("Taro", data::MACRON_RESTORE), "Tarō");
        assert_eq!(apply_word_rules("Ichiro", data::MACRON_RESTORE), "Ichirō");
        // Words outside the table pass through.
        assert_eq!(apply_word_rules("Hikari", data::MACRON_RESTORE), "Hikari");
    }

    #[test]
    fn strip_macrons_covers_all_long_vowels() {
        assert_eq!(strip_macrons("Tarō Yūko Ē Ā Ī"), "Taro Yuko E A I");
    }
}
