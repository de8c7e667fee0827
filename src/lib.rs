//! onomast — script-aware romanization of personal names.
//!
//! A name tagged with an ISO country code is routed to a per-script
//! conversion strategy (dictionary → library → character map →
//! placeholder); strategy and routing failures fall through an explicit
//! chain that terminates in a catch-all Unicode→ASCII tier, so every
//! structurally valid request resolves to a best-effort Latin rendering
//! with a heuristic confidence score and the method that produced it.
//!
//! ```
//! use onomast::{NameRequest, Transliterator};
//!
//! let service = Transliterator::new();
//! let result = service
//!     .transliterate(&NameRequest::new("محمد", "علي", "EG"))
//!     .unwrap();
//! assert_eq!(result.first_name.text, "Mohammed");
//! assert_eq!(result.last_name.text, "Ali");
//! ```

pub mod country;
pub mod request;
pub mod router;
pub mod script;
pub mod strategy;
pub mod tables;
pub mod transliterator;

pub use country::CountryGroup;
pub use request::{
    FieldOutcome, Method, NameRequest, NameRole, TransliterationResult, ValidationError,
};
pub use router::EngineConfig;
pub use script::Script;
pub use strategy::{ConvertOptions, Strategy, StrategyError};
pub use tables::DictionaryOverlay;
pub use transliterator::{Transliterator, TransliteratorBuilder};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
