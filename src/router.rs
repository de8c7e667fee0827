//! Two-tier strategy routing with error absorption.
//!
//! Tier 1 is the country hint, tier 2 the detected script, tier 3 the
//! General catch-all. Every strategy failure is converted into a fallback
//! attempt at the next tier; no error escapes `route`. Precedence is one
//! uniform rule: the country hint wins whenever its strategy accepts the
//! input, and a hinted strategy rejects input carrying none of its script.

use crate::country::CountryGroup;
use crate::request::{FieldOutcome, Method, NameRole};
use crate::script::{self, Script};
use crate::strategy::arabic::ArabicStrategy;
use crate::strategy::charmap::CharMapStrategy;
use crate::strategy::chinese::ChineseStrategy;
use crate::strategy::general::GeneralStrategy;
use crate::strategy::japanese::JapaneseStrategy;
use crate::strategy::korean::KoreanStrategy;
use crate::strategy::latin::LatinStrategy;
use crate::strategy::{ConvertOptions, Strategy};
use crate::tables::DictionaryOverlay;
use std::sync::Arc;
use tracing::{debug, warn};

/// Availability toggles for the external conversion libraries. Disabling
/// an engine deterministically exercises the corresponding fallback tier;
/// the default enables everything.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub japanese: bool,
    pub korean: bool,
    pub chinese: bool,
    pub arabic: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            japanese: true,
            korean: true,
            chinese: true,
            arabic: true,
        }
    }
}

pub struct Router {
    japanese: JapaneseStrategy,
    korean: KoreanStrategy,
    chinese: ChineseStrategy,
    arabic: ArabicStrategy,
    cyrillic: CharMapStrategy,
    greek: CharMapStrategy,
    thai: CharMapStrategy,
    devanagari: CharMapStrategy,
    latin: LatinStrategy,
    general: GeneralStrategy,
}

impl Router {
    pub fn new(engines: EngineConfig, overlay: Arc<DictionaryOverlay>) -> Self {
        Self {
            japanese: JapaneseStrategy::new(engines.japanese, overlay.clone()),
            korean: KoreanStrategy::new(engines.korean, overlay.clone()),
            chinese: ChineseStrategy::new(engines.chinese),
            arabic: ArabicStrategy::new(engines.arabic, overlay),
            cyrillic: CharMapStrategy::cyrillic(),
            greek: CharMapStrategy::greek(),
            thai: CharMapStrategy::thai(),
            devanagari: CharMapStrategy::devanagari(),
            latin: LatinStrategy,
            general: GeneralStrategy,
        }
    }

    pub(crate) fn japanese_engine_ready(&self) -> bool {
        self.japanese.engine_ready()
    }

    fn by_script(&self, script: Script) -> Option<&dyn Strategy> {
        match script {
            Script::Japanese => Some(&self.japanese),
            Script::Korean => Some(&self.korean),
            Script::Chinese => Some(&self.chinese),
            Script::Arabic => Some(&self.arabic),
            Script::Cyrillic => Some(&self.cyrillic),
            Script::Greek => Some(&self.greek),
            Script::Thai => Some(&self.thai),
            Script::Devanagari => Some(&self.devanagari),
            Script::Latin => Some(&self.latin),
            Script::Unknown => None,
        }
    }

    /// Route one field to a strategy and absorb every failure.
    pub fn route(
        &self,
        text: &str,
        role: NameRole,
        hint: Option<CountryGroup>,
        opts: &ConvertOptions,
    ) -> FieldOutcome {
        let mut tried_script = None;

        if let Some(group) = hint {
            let script = group.script();
            // Unwrap is safe: every CountryGroup script has a strategy.
            let strategy = self.by_script(script).expect("country group without strategy");
            tried_script = Some(script);
            match strategy.convert(text, role, opts) {
                Ok(outcome) => return outcome,
                Err(e) => {
                    warn!(
                        strategy = strategy.name(),
                        error = %e,
                        "country-hinted strategy failed; falling through to script routing"
                    );
                }
            }
        }

        let detected = script::classify(text);
        if Some(detected) != tried_script {
            if let Some(strategy) = self.by_script(detected) {
                match strategy.convert(text, role, opts) {
                    Ok(outcome) => return outcome,
                    Err(e) => {
                        warn!(
                            strategy = strategy.name(),
                            error = %e,
                            "script-detected strategy failed; falling through to general"
                        );
                    }
                }
            } else {
                debug!("script detection found no usable script; using general");
            }
        }

        // General cannot fail by construction.
        self.general
            .convert(text, role, opts)
            .unwrap_or_else(|_| FieldOutcome::new(text, 0.1, Method::FallbackOriginal))
    }
}
