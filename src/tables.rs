//! Static data arena: per-script name dictionaries, character maps, and
//! ordered correction-rule tables.
//!
//! Everything in the submodules is compiled in via `phf` maps or `'static`
//! slices and is immutable for the lifetime of the process. Rule tables
//! whose application order matters are plain slices, not maps — iteration
//! order is part of the data.
//!
//! A thin runtime overlay can be layered on top from a JSON mappings
//! file keyed by country code. Overlay loading never fails the
//! caller: a missing or malformed source degrades to an empty overlay with
//! a warning.

pub mod arabic;
pub mod charmaps;
pub mod japanese;
pub mod korean;

use crate::request::NameRole;
use crate::script::Script;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// Runtime additions to the compiled dictionaries, consulted before them.
///
/// Expected JSON shape (a `name-mappings.json` document):
/// ```json
/// { "mappings": { "JP": { "firstName": {"太郎": "Tarō"}, "lastName": {} } } }
/// ```
/// Top-level keys are country codes; `JP` feeds the Japanese dictionaries,
/// `KR` the Korean ones, everything in the Arabic country set the Arabic
/// ones.
#[derive(Debug, Default)]
pub struct DictionaryOverlay {
    entries: HashMap<(Script, bool), HashMap<String, String>>,
}

#[derive(Deserialize)]
struct MappingsFile {
    #[serde(default)]
    mappings: HashMap<String, RoleMaps>,
}

#[derive(Deserialize, Default)]
struct RoleMaps {
    #[serde(default, rename = "firstName")]
    first_name: HashMap<String, String>,
    #[serde(default, rename = "lastName")]
    last_name: HashMap<String, String>,
}

impl DictionaryOverlay {
    /// Parse a mappings JSON document. Malformed input yields an empty
    /// overlay; this is a warning, never a failure.
    pub fn from_json(json: &str) -> Self {
        let parsed: MappingsFile = match serde_json::from_str(json) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "could not parse mappings overlay; using empty overlay");
                return Self::default();
            }
        };

        let mut entries: HashMap<(Script, bool), HashMap<String, String>> = HashMap::new();
        for (country, roles) in parsed.mappings {
            let script = match crate::country::CountryGroup::from_code(&country) {
                Some(group) => group.script(),
                None => {
                    warn!(country = %country, "mappings overlay entry for unrouted country ignored");
                    continue;
                }
            };
            entries
                .entry((script, true))
                .or_default()
                .extend(roles.first_name);
            entries
                .entry((script, false))
                .or_default()
                .extend(roles.last_name);
        }
        Self { entries }
    }

    /// Read and parse a mappings file. IO errors degrade to an empty
    /// overlay, same as parse errors.
    pub fn from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read mappings overlay");
                Self::default()
            }
        }
    }

    pub fn lookup(&self, script: Script, role: NameRole, key: &str) -> Option<&str> {
        self.entries
            .get(&(script, matches!(role, NameRole::Given)))
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_parses_role_maps() {
        let overlay = DictionaryOverlay::from_json(
            r#"{"mappings":{"JP":{"firstName":{"桜子":"Sakurako"},"lastName":{"東":"Azuma"}}}}"#,
        );
        assert_eq!(
            overlay.lookup(Script::Japanese, NameRole::Given, "桜子"),
            Some("Sakurako")
        );
        assert_eq!(
            overlay.lookup(Script::Japanese, NameRole::Family, "東"),
            Some("Azuma")
        );
        assert_eq!(overlay.lookup(Script::Japanese, NameRole::Family, "桜子"), None);
    }

    #[test]
    fn malformed_overlay_degrades_to_empty() {
        assert!(DictionaryOverlay::from_json("{not json").is_empty());
        assert!(DictionaryOverlay::from_json("[]").is_empty());
        assert!(DictionaryOverlay::from_file(std::path::Path::new("/nonexistent/x.json")).is_empty());
    }

    #[test]
    fn unrouted_country_entries_are_ignored() {
        let overlay = DictionaryOverlay::from_json(
            r#"{"mappings":{"ZZ":{"firstName":{"x":"y"}}}}"#,
        );
        assert!(overlay.is_empty());
    }
}
