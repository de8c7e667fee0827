//! Request/response envelope and input validation.
//!
//! Field names serialize in camelCase so the wire shape matches the JSON
//! contract of the surrounding service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Structural input errors. These are the only failures `transliterate`
/// surfaces to the caller; everything else degrades to a fallback tier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: firstName")]
    MissingFirstName,
    #[error("missing required field: country")]
    MissingCountry,
    #[error("malformed country code: {0:?} (expected two ASCII uppercase letters)")]
    MalformedCountry(String),
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A single name to romanize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub country: String,
    /// Request macron-free output for Japanese (passport-style romaji).
    #[serde(default)]
    pub normalized: bool,
}

impl NameRequest {
    pub fn new(first_name: &str, last_name: &str, country: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            country: country.to_owned(),
            normalized: false,
        }
    }

    /// Core contract: `first_name` and `country` must be present.
    /// An empty `last_name` is allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.is_empty() {
            return Err(ValidationError::MissingFirstName);
        }
        if self.country.is_empty() {
            return Err(ValidationError::MissingCountry);
        }
        Ok(())
    }

    /// Transport contract: on top of [`validate`](Self::validate), the
    /// country code must already be two ASCII uppercase letters. Callers
    /// sitting on a wire boundary run this after trimming/upper-casing.
    pub fn validate_strict(&self) -> Result<(), ValidationError> {
        self.validate()?;
        let ok = self.country.len() == 2
            && self.country.bytes().all(|b| b.is_ascii_uppercase());
        if !ok {
            return Err(ValidationError::MalformedCountry(self.country.clone()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Provenance of a romanized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    ExactDictionaryMatch,
    MixedDictionaryMatch,
    LibraryConversion,
    CharacterMap,
    DiacriticNormalization,
    LatinPassthrough,
    GeneralTransliteration,
    ErrorFallback,
    FallbackOriginal,
    Empty,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::ExactDictionaryMatch => "exact_dictionary_match",
            Method::MixedDictionaryMatch => "mixed_dictionary_match",
            Method::LibraryConversion => "library_conversion",
            Method::CharacterMap => "character_map",
            Method::DiacriticNormalization => "diacritic_normalization",
            Method::LatinPassthrough => "latin_passthrough",
            Method::GeneralTransliteration => "general_transliteration",
            Method::ErrorFallback => "error_fallback",
            Method::FallbackOriginal => "fallback_original",
            Method::Empty => "empty",
        }
    }
}

/// Which half of the name a strategy is converting. Dictionaries are keyed
/// per role: surnames and given names romanize differently in several
/// scripts (이 → "Lee" as a surname, "I" as a given-name syllable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    Given,
    Family,
}

/// Per-field conversion outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOutcome {
    pub text: String,
    pub accuracy: f64,
    pub method: Method,
}

impl FieldOutcome {
    pub fn new(text: impl Into<String>, accuracy: f64, method: Method) -> Self {
        Self {
            text: text.into(),
            accuracy,
            method,
        }
    }

    /// The automatic outcome for an absent last name. It still participates
    /// in the overall average.
    pub fn empty() -> Self {
        Self::new("", 0.95, Method::Empty)
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The composed response for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransliterationResult {
    pub first_name: FieldOutcome,
    pub last_name: FieldOutcome,
    pub country: String,
    /// `round(avg(first, last), 2)`
    pub overall_accuracy: f64,
    /// Representative method for simple consumers: the first name's.
    pub method: Method,
}

impl TransliterationResult {
    pub fn compose(first: FieldOutcome, last: FieldOutcome, country: &str) -> Self {
        let avg = (first.accuracy + last.accuracy) / 2.0;
        let method = first.method;
        Self {
            first_name: first,
            last_name: last,
            country: country.to_owned(),
            overall_accuracy: round2(avg),
            method,
        }
    }
}

#[inline]
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_first_name_and_country() {
        let req = NameRequest::new("", "علي", "EG");
        assert_eq!(req.validate(), Err(ValidationError::MissingFirstName));

        let req = NameRequest::new("محمد", "علي", "");
        assert_eq!(req.validate(), Err(ValidationError::MissingCountry));

        let req = NameRequest::new("محمد", "", "EG");
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn strict_validation_checks_country_shape() {
        for bad in ["eg", "EGY", "E1", "E", "??"] {
            let req = NameRequest::new("a", "", bad);
            assert!(matches!(
                req.validate_strict(),
                Err(ValidationError::MalformedCountry(_))
            ));
        }
        assert_eq!(NameRequest::new("a", "", "EG").validate_strict(), Ok(()));
    }

    #[test]
    fn compose_averages_and_rounds() {
        let r = TransliterationResult::compose(
            FieldOutcome::new("Tarō", 0.85, Method::LibraryConversion),
            FieldOutcome::new("Yamada", 0.95, Method::ExactDictionaryMatch),
            "JP",
        );
        assert_eq!(r.overall_accuracy, 0.9);
        assert_eq!(r.method, Method::LibraryConversion);
    }

    #[test]
    fn empty_last_name_outcome() {
        let e = FieldOutcome::empty();
        assert_eq!(e.text, "");
        assert_eq!(e.accuracy, 0.95);
        assert_eq!(e.method, Method::Empty);
    }

    #[test]
    fn request_wire_shape_is_camel_case() {
        let req: NameRequest =
            serde_json::from_str(r#"{"firstName":"太郎","lastName":"山田","country":"JP"}"#)
                .unwrap();
        assert_eq!(req.first_name, "太郎");
        assert_eq!(req.last_name, "山田");
        assert!(!req.normalized);

        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"firstName\""));
    }

    #[test]
    fn method_wire_names() {
        assert_eq!(
            serde_json::to_string(&Method::ExactDictionaryMatch).unwrap(),
            "\"exact_dictionary_match\""
        );
        assert_eq!(Method::FallbackOriginal.as_str(), "fallback_original");
    }
}
