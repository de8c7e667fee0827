//! Chinese strategy: pinyin conversion, toneless, syllables concatenated.
//!
//! This strategy has no character-map tier of its own; when the engine is
//! unavailable or produces nothing, the error surfaces and the router
//! falls through to General.

use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::{ConvertOptions, Strategy, StrategyError, capitalize_words};
use pinyin::ToPinyin;

pub struct ChineseStrategy {
    library_enabled: bool,
}

impl ChineseStrategy {
    pub fn new(library_enabled: bool) -> Self {
        Self { library_enabled }
    }
}

impl Strategy for ChineseStrategy {
    fn name(&self) -> &'static str {
        "chinese"
    }

    fn convert(
        &self,
        text: &str,
        _role: NameRole,
        _opts: &ConvertOptions,
    ) -> Result<FieldOutcome, StrategyError> {
        if !script::contains_script(text, Script::Chinese) {
            return Err(StrategyError::ScriptMismatch(Script::Chinese));
        }
        if !self.library_enabled {
            return Err(StrategyError::EngineUnavailable("pinyin"));
        }

        let mut out = String::with_capacity(text.len());
        let mut syllables = 0usize;
        for (c, py) in text.chars().zip(text.to_pinyin()) {
            match py {
                Some(p) => {
                    out.push_str(p.plain());
                    syllables += 1;
                }
                None => out.push(c),
            }
        }
        if syllables == 0 {
            return Err(StrategyError::EngineFailed {
                engine: "pinyin",
                message: "no convertible ideographs".into(),
            });
        }

        Ok(FieldOutcome::new(
            capitalize_words(&out),
            0.9,
            Method::LibraryConversion,
        ))
    }
}
