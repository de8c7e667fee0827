//! Latin strategy: diacritic normalization via NFD, or clean passthrough.
//!
//! Decomposition handles the precomposed accent cases (é → e + U+0301);
//! the residual table covers atomic letters and ligatures NFD leaves
//! alone (ß, Æ, Ø, Đ, Þ, œ).

use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::{ConvertOptions, Strategy, StrategyError, capitalize_words};
use crate::tables::charmaps::LATIN_RESIDUALS;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub struct LatinStrategy;

impl LatinStrategy {
    fn has_diacritics(text: &str) -> bool {
        if text.is_ascii() {
            return false;
        }
        text.nfd().any(is_combining_mark)
            || text.chars().any(|c| {
                let mut buf = [0u8; 4];
                LATIN_RESIDUALS.contains_key(c.encode_utf8(&mut buf))
            })
    }

    fn normalize(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.nfd() {
            if is_combining_mark(c) {
                continue;
            }
            let mut buf = [0u8; 4];
            match LATIN_RESIDUALS.get(c.encode_utf8(&mut buf)) {
                Some(sub) => out.push_str(sub),
                None => out.push(c),
            }
        }
        out
    }
}

impl Strategy for LatinStrategy {
    fn name(&self) -> &'static str {
        "latin"
    }

    fn convert(
        &self,
        text: &str,
        _role: NameRole,
        _opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        // Symbol-only non-ASCII input is not ours; let the router end at
        // General instead of blessing it with a passthrough.
        if !text.is_ascii()
            && !script::contains_script(text, Script::Latin)
            && !Self::has_diacritics(text)
        {
            return Err(StrategyError::ScriptMismatch(Script::Latin));
        }

        if Self::has_diacritics(text) {
            Ok(FieldOutcome::new(
                capitalize_words(&Self::normalize(text)),
                0.98,
                Method::DiacriticNormalization,
            ))
        } else {
            Ok(FieldOutcome::new(
                capitalize_words(text),
                1.0,
                Method::LatinPassthrough,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> FieldOutcome {
        LatinStrategy
            .convert(text, NameRole::Given, &ConvertOptions::default())
            .unwrap()
    }

    #[test]
    fn accents_are_stripped() {
        let out = convert("José");
        assert_eq!(out.text, "Jose");
        assert_eq!(out.accuracy, 0.98);
        assert_eq!(out.method, Method::DiacriticNormalization);

        assert_eq!(convert("García").text, "Garcia");
        assert_eq!(convert("Müller").text, "Muller");
        assert_eq!(convert("Crème Brûlée").text, "Creme Brulee");
    }

    #[test]
    fn residuals_without_combining_marks() {
        assert_eq!(convert("Großmann").text, "Grossmann");
        assert_eq!(convert("Østergaard").text, "Ostergaard");
        assert_eq!(convert("Þór").text, "Thor");
        assert_eq!(convert("Đorđević").text, "Dordevic");
    }

    #[test]
    fn ascii_passes_through_unchanged() {
        let out = convert("Xyz");
        assert_eq!(out.text, "Xyz");
        assert_eq!(out.method, Method::LatinPassthrough);
        assert_eq!(out.accuracy, 1.0);
    }

    #[test]
    fn passthrough_case_normalizes_first_letter_only() {
        assert_eq!(convert("smith").text, "Smith");
        assert_eq!(convert("McDonald").text, "McDonald");
    }

    #[test]
    fn symbol_only_input_is_rejected() {
        let err = LatinStrategy
            .convert("☃☃", NameRole::Given, &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, StrategyError::ScriptMismatch(Script::Latin)));
    }

    #[test]
    fn decomposed_input_normalizes_too() {
        // e + combining acute, already in NFD form.
        let out = convert("Jose\u{0301}");
        assert_eq!(out.text, "Jose");
        assert_eq!(out.method, Method::DiacriticNormalization);
    }
}
