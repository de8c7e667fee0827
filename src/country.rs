//! Country-code routing groups.
//!
//! Tier-1 routing: an ISO 3166-1 alpha-2 code maps to the strategy most
//! likely to apply. The groups are deliberately generous — membership only
//! expresses a *hint*, and a hinted strategy still rejects input whose
//! codepoints don't match its script, so an over-broad entry costs one
//! extra routing step, not a wrong answer.

use crate::script::Script;
use phf::{Set, phf_set};

/// Countries whose names are predominantly written in Arabic script,
/// plus Persian/Urdu-adjacent codes that lean on the same codepoint
/// blocks.
static ARABIC_COUNTRIES: Set<&'static str> = phf_set! {
    "SA", "EG", "AE", "QA", "KW", "BH", "OM", "JO", "LB", "SY", "IQ", "IR",
    "AF", "PK", "BD", "MV", "DJ", "SO", "ER", "TD", "SD", "LY", "TN", "DZ",
    "MA", "MR", "NE", "ML", "BF", "SN", "GN", "GW", "SL", "LR", "TG", "BJ",
    "CV", "ST", "CM", "NG", "GH", "CI", "GQ", "GA", "CG", "CF", "SS", "ET",
    "KM", "MG", "MU", "SC", "YE", "IL", "PS", "TR", "AZ", "UZ", "KZ", "KG",
    "TJ", "TM", "XK",
};

/// Tagged routing group resolved from a country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryGroup {
    Japanese,
    Korean,
    Chinese,
    Arabic,
    Cyrillic,
    Devanagari,
    Greek,
    Thai,
}

impl CountryGroup {
    /// Exact code or group membership. `None` means no country hint exists
    /// and the router goes straight to script-detected routing.
    pub fn from_code(code: &str) -> Option<CountryGroup> {
        match code {
            "JP" => Some(CountryGroup::Japanese),
            "KR" => Some(CountryGroup::Korean),
            "CN" | "TW" | "HK" | "MO" | "SG" => Some(CountryGroup::Chinese),
            "RU" | "UA" | "BY" | "BG" | "RS" | "MK" | "MN" => Some(CountryGroup::Cyrillic),
            "IN" | "NP" => Some(CountryGroup::Devanagari),
            "GR" | "CY" => Some(CountryGroup::Greek),
            "TH" => Some(CountryGroup::Thai),
            _ if ARABIC_COUNTRIES.contains(code) => Some(CountryGroup::Arabic),
            _ => None,
        }
    }

    /// The script a group's strategy converts.
    pub const fn script(self) -> Script {
        match self {
            CountryGroup::Japanese => Script::Japanese,
            CountryGroup::Korean => Script::Korean,
            CountryGroup::Chinese => Script::Chinese,
            CountryGroup::Arabic => Script::Arabic,
            CountryGroup::Cyrillic => Script::Cyrillic,
            CountryGroup::Devanagari => Script::Devanagari,
            CountryGroup::Greek => Script::Greek,
            CountryGroup::Thai => Script::Thai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_codes() {
        assert_eq!(CountryGroup::from_code("JP"), Some(CountryGroup::Japanese));
        assert_eq!(CountryGroup::from_code("KR"), Some(CountryGroup::Korean));
        assert_eq!(CountryGroup::from_code("TH"), Some(CountryGroup::Thai));
    }

    #[test]
    fn chinese_group() {
        for code in ["CN", "TW", "HK", "MO", "SG"] {
            assert_eq!(CountryGroup::from_code(code), Some(CountryGroup::Chinese));
        }
    }

    #[test]
    fn arabic_set_membership() {
        for code in ["EG", "SA", "MA", "AE"] {
            assert_eq!(CountryGroup::from_code(code), Some(CountryGroup::Arabic));
        }
    }

    #[test]
    fn unmapped_codes_have_no_hint() {
        assert_eq!(CountryGroup::from_code("ZZ"), None);
        assert_eq!(CountryGroup::from_code("US"), None);
        assert_eq!(CountryGroup::from_code("ES"), None);
    }
}
