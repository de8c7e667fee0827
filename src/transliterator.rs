//! The romanization service: owns the strategies via the router, runs
//! each name field independently, and composes the response envelope.

use crate::country::CountryGroup;
use crate::request::{
    FieldOutcome, NameRequest, NameRole, TransliterationResult, ValidationError,
};
use crate::router::{EngineConfig, Router};
use crate::strategy::ConvertOptions;
use crate::tables::DictionaryOverlay;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Shared, immutable romanization service. Construction warms up the
/// conversion engines; afterwards every call is a pure function of its
/// input and freely concurrent.
pub struct Transliterator {
    router: Router,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Transliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    /// Romanize one name. Errs only on structurally invalid input; every
    /// routing, library, or script-mismatch failure resolves to a
    /// best-effort outcome instead.
    pub fn transliterate(
        &self,
        request: &NameRequest,
    ) -> Result<TransliterationResult, ValidationError> {
        request.validate()?;

        let hint = CountryGroup::from_code(&request.country);
        let opts = ConvertOptions {
            normalized: request.normalized,
        };
        debug!(
            country = %request.country,
            hinted = hint.is_some(),
            "routing request"
        );

        let first = self
            .router
            .route(&request.first_name, NameRole::Given, hint, &opts);
        let last = if request.last_name.is_empty() {
            FieldOutcome::empty()
        } else {
            self.router
                .route(&request.last_name, NameRole::Family, hint, &opts)
        };

        Ok(TransliterationResult::compose(first, last, &request.country))
    }

    /// Whether the Japanese morphological engine survived warm-up.
    pub fn japanese_engine_ready(&self) -> bool {
        self.router.japanese_engine_ready()
    }
}

/// Builder over engine availability and the optional dictionary overlay.
pub struct TransliteratorBuilder {
    engines: EngineConfig,
    overlay: DictionaryOverlay,
}

impl Default for TransliteratorBuilder {
    fn default() -> Self {
        Self {
            engines: EngineConfig::default(),
            overlay: DictionaryOverlay::default(),
        }
    }
}

impl TransliteratorBuilder {
    pub fn engines(mut self, engines: EngineConfig) -> Self {
        self.engines = engines;
        self
    }

    /// Layer extra dictionary entries from a mappings JSON document.
    /// Malformed input degrades to no overlay.
    pub fn mappings_json(mut self, json: &str) -> Self {
        self.overlay = DictionaryOverlay::from_json(json);
        self
    }

    /// Layer extra dictionary entries from a mappings file. A missing or
    /// unreadable file degrades to no overlay.
    pub fn mappings_file(mut self, path: impl AsRef<Path>) -> Self {
        self.overlay = DictionaryOverlay::from_file(path.as_ref());
        self
    }

    pub fn build(self) -> Transliterator {
        Transliterator {
            router: Router::new(self.engines, Arc::new(self.overlay)),
        }
    }
}
