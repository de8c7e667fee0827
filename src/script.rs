//! Codepoint-range script detection.
//!
//! Classification runs over raw codepoint ranges, never over dictionaries:
//! a string is tagged by the first matching script in a fixed priority
//! order. Pure-Han text is inherently ambiguous between Chinese and
//! Japanese; the classifier alone cannot resolve that, so it reports
//! `Chinese` for bare ideographs and leaves the country hint in the router
//! to override. This is an accepted limitation of codepoint-level
//! detection, not something to paper over here.

use serde::{Deserialize, Serialize};

/// Writing system detected from a string's codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Japanese,
    Korean,
    Chinese,
    Cyrillic,
    Devanagari,
    Greek,
    Thai,
    Latin,
    Unknown,
}

impl Script {
    pub const fn as_str(self) -> &'static str {
        match self {
            Script::Arabic => "arabic",
            Script::Japanese => "japanese",
            Script::Korean => "korean",
            Script::Chinese => "chinese",
            Script::Cyrillic => "cyrillic",
            Script::Devanagari => "devanagari",
            Script::Greek => "greek",
            Script::Thai => "thai",
            Script::Latin => "latin",
            Script::Unknown => "unknown",
        }
    }
}

// Hiragana block.
#[inline(always)]
pub const fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

// Katakana + phonetic extensions.
#[inline(always)]
pub const fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FF |
        0x31F0..=0x31FF
    )
}

// Japanese iteration marks (々 and 〻) only make sense in Japanese text
// and disambiguate otherwise pure-Han strings.
#[inline(always)]
pub const fn is_japanese_mark(c: char) -> bool {
    matches!(c as u32, 0x3005 | 0x303B)
}

#[inline(always)]
pub const fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

// Unified Han blocks + extension A + compatibility block.
#[inline(always)]
pub const fn is_han(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF |
        0x3400..=0x4DBF |
        0xF900..=0xFAFF
    )
}

// Hangul syllables + jamo + compatibility jamo.
#[inline(always)]
pub const fn is_hangul(c: char) -> bool {
    matches!(c as u32,
        0xAC00..=0xD7AF |
        0x1100..=0x11FF |
        0x3130..=0x318F
    )
}

// Precomposed Hangul syllable block only (the arithmetic-decomposable set).
#[inline(always)]
pub const fn is_hangul_syllable(c: char) -> bool {
    matches!(c as u32, 0xAC00..=0xD7A3)
}

// Arabic + supplement + extended-A/B + presentation forms.
#[inline(always)]
pub const fn is_arabic(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF |
        0x0750..=0x077F |
        0x08A0..=0x08FF |
        0xFB50..=0xFDFF |
        0xFE70..=0xFEFF
    )
}

// Cyrillic + supplement.
#[inline(always)]
pub const fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x052F)
}

// Devanagari block.
#[inline(always)]
pub const fn is_devanagari(c: char) -> bool {
    matches!(c as u32, 0x0900..=0x097F)
}

// Greek + Coptic, plus the Greek Extended block (polytonic accents).
#[inline(always)]
pub const fn is_greek(c: char) -> bool {
    matches!(c as u32,
        0x0370..=0x03FF |
        0x1F00..=0x1FFF
    )
}

// Thai block.
#[inline(always)]
pub const fn is_thai(c: char) -> bool {
    matches!(c as u32, 0x0E00..=0x0E7F)
}

/// Classify a whole string by fixed priority.
///
/// Priority: Japanese (kana, or Han co-occurring with Japanese marks) →
/// Korean → Chinese (pure Han) → Arabic → Cyrillic → Devanagari → Greek →
/// Thai → Latin. An empty string is `Unknown`.
pub fn classify(text: &str) -> Script {
    if text.is_empty() {
        return Script::Unknown;
    }

    let mut has_kana = false;
    let mut has_japanese_mark = false;
    let mut has_han = false;
    let mut has_hangul = false;
    let mut has_arabic = false;
    let mut has_cyrillic = false;
    let mut has_devanagari = false;
    let mut has_greek = false;
    let mut has_thai = false;

    for c in text.chars() {
        has_kana |= is_kana(c);
        has_japanese_mark |= is_japanese_mark(c);
        has_han |= is_han(c);
        has_hangul |= is_hangul(c);
        has_arabic |= is_arabic(c);
        has_cyrillic |= is_cyrillic(c);
        has_devanagari |= is_devanagari(c);
        has_greek |= is_greek(c);
        has_thai |= is_thai(c);
    }

    if has_kana || (has_han && has_japanese_mark) {
        return Script::Japanese;
    }
    if has_hangul {
        return Script::Korean;
    }
    if has_han {
        return Script::Chinese;
    }
    if has_arabic {
        return Script::Arabic;
    }
    if has_cyrillic {
        return Script::Cyrillic;
    }
    if has_devanagari {
        return Script::Devanagari;
    }
    if has_greek {
        return Script::Greek;
    }
    if has_thai {
        return Script::Thai;
    }

    Script::Latin
}

/// True if any codepoint belongs to `script`'s ranges.
///
/// Used by strategies as their acceptance gate: a strategy selected by
/// country hint rejects input that contains none of its script.
pub fn contains_script(text: &str, script: Script) -> bool {
    let pred: fn(char) -> bool = match script {
        Script::Arabic => is_arabic,
        Script::Japanese => |c| is_kana(c) || is_han(c) || is_japanese_mark(c),
        Script::Korean => is_hangul,
        Script::Chinese => is_han,
        Script::Cyrillic => is_cyrillic,
        Script::Devanagari => is_devanagari,
        Script::Greek => is_greek,
        Script::Thai => is_thai,
        Script::Latin => |c| c.is_ascii_alphabetic() || matches!(c as u32, 0x00C0..=0x024F),
        Script::Unknown => return false,
    };
    text.chars().any(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_wins_over_han() {
        assert_eq!(classify("さくら"), Script::Japanese);
        assert_eq!(classify("カタカナ"), Script::Japanese);
        assert_eq!(classify("田中ひろし"), Script::Japanese);
    }

    #[test]
    fn iteration_mark_disambiguates_han() {
        assert_eq!(classify("佐々木"), Script::Japanese);
        // Without the mark the same ideographs fall to Chinese.
        assert_eq!(classify("佐木"), Script::Chinese);
    }

    #[test]
    fn pure_han_is_chinese() {
        assert_eq!(classify("王伟"), Script::Chinese);
        assert_eq!(classify("山田"), Script::Chinese);
    }

    #[test]
    fn hangul_detection() {
        assert_eq!(classify("김민수"), Script::Korean);
        assert_eq!(classify("가"), Script::Korean); // conjoining jamo
    }

    #[test]
    fn alphabetic_scripts() {
        assert_eq!(classify("محمد"), Script::Arabic);
        assert_eq!(classify("Иванов"), Script::Cyrillic);
        assert_eq!(classify("राहुल"), Script::Devanagari);
        assert_eq!(classify("Παπαδόπουλος"), Script::Greek);
        assert_eq!(classify("สมชาย"), Script::Thai);
    }

    #[test]
    fn latin_is_the_default() {
        assert_eq!(classify("Smith"), Script::Latin);
        assert_eq!(classify("García"), Script::Latin);
        assert_eq!(classify("12-34"), Script::Latin);
    }

    #[test]
    fn empty_is_unknown() {
        assert_eq!(classify(""), Script::Unknown);
    }

    #[test]
    fn mixed_script_priority_order() {
        // Hangul + Latin → Korean (Hangul outranks the Latin default).
        assert_eq!(classify("Kim김"), Script::Korean);
        // Arabic + Cyrillic → Arabic (earlier in priority order).
        assert_eq!(classify("محمدИ"), Script::Arabic);
    }

    #[test]
    fn contains_script_gates() {
        assert!(contains_script("محمد", Script::Arabic));
        assert!(!contains_script("Smith", Script::Arabic));
        assert!(contains_script("太郎", Script::Japanese));
        assert!(contains_script("太郎", Script::Chinese));
        assert!(!contains_script("민수", Script::Chinese));
    }
}
