//! General catch-all strategy: best-effort Unicode→ASCII.
//!
//! The terminal routing tier. Must be exception-free by construction:
//! every path returns an outcome, and an empty conversion degrades to the
//! untouched original rather than an empty string.

use crate::request::{FieldOutcome, Method, NameRole};
use crate::strategy::{ConvertOptions, Strategy, StrategyError, capitalize_words};
use deunicode::deunicode;

pub struct GeneralStrategy;

impl Strategy for GeneralStrategy {
    fn name(&self) -> &'static str {
        "general"
    }

    fn convert(
        &self,
        text: &str,
        _role: NameRole,
        _opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        let ascii = deunicode(text);
        let trimmed = ascii.trim();
        if trimmed.is_empty() && !text.is_empty() {
            return Ok(FieldOutcome::new(text, 0.1, Method::FallbackOriginal));
        }
        Ok(FieldOutcome::new(
            capitalize_words(trimmed),
            0.6,
            Method::GeneralTransliteration,
        ))
    }
}
