//! Longest-match-first character/digraph maps for the table-driven
//! strategies, plus the residual Latin substitutions NFD decomposition
//! cannot reach.
//!
//! Tone and pure-diacritic marks map to the empty string; characters
//! absent from a map pass through unchanged.

use phf::{Map, phf_map};

/// Russian Cyrillic, GOST-style practical transcription.
pub static CYRILLIC: Map<&'static str, &'static str> = phf_map! {
    "А" => "A", "Б" => "B", "В" => "V", "Г" => "G", "Д" => "D",
    "Е" => "E", "Ё" => "Yo", "Ж" => "Zh", "З" => "Z", "И" => "I",
    "Й" => "Y", "К" => "K", "Л" => "L", "М" => "M", "Н" => "N",
    "О" => "O", "П" => "P", "Р" => "R", "С" => "S", "Т" => "T",
    "У" => "U", "Ф" => "F", "Х" => "Kh", "Ц" => "Ts", "Ч" => "Ch",
    "Ш" => "Sh", "Щ" => "Shch", "Ъ" => "", "Ы" => "Y", "Ь" => "",
    "Э" => "E", "Ю" => "Yu", "Я" => "Ya",
    "а" => "a", "б" => "b", "в" => "v", "г" => "g", "д" => "d",
    "е" => "e", "ё" => "yo", "ж" => "zh", "з" => "z", "и" => "i",
    "й" => "y", "к" => "k", "л" => "l", "м" => "m", "н" => "n",
    "о" => "o", "п" => "p", "р" => "r", "с" => "s", "т" => "t",
    "у" => "u", "ф" => "f", "х" => "kh", "ц" => "ts", "ч" => "ch",
    "ш" => "sh", "щ" => "shch", "ъ" => "", "ы" => "y", "ь" => "",
    "э" => "e", "ю" => "yu", "я" => "ya",
};

/// Modern Greek, ELOT-style.
pub static GREEK: Map<&'static str, &'static str> = phf_map! {
    "Α" => "A", "Β" => "V", "Γ" => "G", "Δ" => "D", "Ε" => "E",
    "Ζ" => "Z", "Η" => "I", "Θ" => "Th", "Ι" => "I", "Κ" => "K",
    "Λ" => "L", "Μ" => "M", "Ν" => "N", "Ξ" => "X", "Ο" => "O",
    "Π" => "P", "Ρ" => "R", "Σ" => "S", "Τ" => "T", "Υ" => "Y",
    "Φ" => "F", "Χ" => "Ch", "Ψ" => "Ps", "Ω" => "O",
    "α" => "a", "β" => "v", "γ" => "g", "δ" => "d", "ε" => "e",
    "ζ" => "z", "η" => "i", "θ" => "th", "ι" => "i", "κ" => "k",
    "λ" => "l", "μ" => "m", "ν" => "n", "ξ" => "x", "ο" => "o",
    "π" => "p", "ρ" => "r", "σ" => "s", "ς" => "s", "τ" => "t",
    "υ" => "y", "φ" => "f", "χ" => "ch", "ψ" => "ps", "ω" => "o",
    // Accented vowels
    "Ά" => "A", "Έ" => "E", "Ή" => "I", "Ί" => "I", "Ό" => "O",
    "Ύ" => "Y", "Ώ" => "O",
    "ά" => "a", "έ" => "e", "ή" => "i", "ί" => "i", "ό" => "o",
    "ύ" => "y", "ώ" => "o",
    "ϊ" => "i", "ϋ" => "y", "ΐ" => "i", "ΰ" => "y",
};

/// Thai, RTGS-leaning consonant/vowel values; tone marks vanish.
pub static THAI: Map<&'static str, &'static str> = phf_map! {
    // Consonants
    "ก" => "k", "ข" => "kh", "ค" => "kh", "ฆ" => "kh", "ง" => "ng",
    "จ" => "ch", "ฉ" => "ch", "ช" => "ch", "ซ" => "s", "ฌ" => "ch",
    "ญ" => "y", "ฎ" => "d", "ฏ" => "t", "ฐ" => "th", "ฑ" => "th",
    "ฒ" => "th", "ณ" => "n", "ด" => "d", "ต" => "t", "ถ" => "th",
    "ท" => "th", "ธ" => "th", "น" => "n", "บ" => "b", "ป" => "p",
    "ผ" => "ph", "ฝ" => "f", "พ" => "ph", "ฟ" => "f", "ภ" => "ph",
    "ม" => "m", "ย" => "y", "ร" => "r", "ล" => "l", "ว" => "w",
    "ศ" => "s", "ษ" => "s", "ส" => "s", "ห" => "h", "ฬ" => "l",
    "อ" => "", "ฮ" => "h",
    // Vowels
    "ะ" => "a", "า" => "a", "ิ" => "i", "ี" => "i", "ึ" => "ue",
    "ื" => "ue", "ุ" => "u", "ู" => "u", "เ" => "e", "แ" => "ae",
    "โ" => "o", "ใ" => "ai", "ไ" => "ai", "ำ" => "am", "ฤ" => "rue",
    "ฦ" => "lue", "ั" => "a",
    // Tone marks
    "\u{0E48}" => "", "\u{0E49}" => "", "\u{0E4A}" => "", "\u{0E4B}" => "",
    // Silencer
    "\u{0E4C}" => "",
    // Digits
    "๐" => "0", "๑" => "1", "๒" => "2", "๓" => "3", "๔" => "4",
    "๕" => "5", "๖" => "6", "๗" => "7", "๘" => "8", "๙" => "9",
};

/// Devanagari (Hindi), with the common conjuncts as two-codepoint keys so
/// the longest-match scan picks them up before their parts.
pub static DEVANAGARI: Map<&'static str, &'static str> = phf_map! {
    // Conjuncts
    "क्ष" => "ksha", "त्र" => "tra", "ज्ञ" => "gya",
    // Independent vowels
    "अ" => "a", "आ" => "aa", "इ" => "i", "ई" => "ii", "उ" => "u",
    "ऊ" => "uu", "ऋ" => "ri", "ए" => "e", "ऐ" => "ai", "ओ" => "o",
    "औ" => "au",
    // Vowel signs
    "ा" => "aa", "ि" => "i", "ी" => "ii", "ु" => "u", "ू" => "uu",
    "ृ" => "ri", "े" => "e", "ै" => "ai", "ो" => "o", "ौ" => "au",
    // Consonants (inherent a)
    "क" => "ka", "ख" => "kha", "ग" => "ga", "घ" => "gha", "ङ" => "nga",
    "च" => "cha", "छ" => "chha", "ज" => "ja", "झ" => "jha", "ञ" => "nya",
    "ट" => "ta", "ठ" => "tha", "ड" => "da", "ढ" => "dha", "ण" => "na",
    "त" => "ta", "थ" => "tha", "द" => "da", "ध" => "dha", "न" => "na",
    "प" => "pa", "फ" => "pha", "ब" => "ba", "भ" => "bha", "म" => "ma",
    "य" => "ya", "र" => "ra", "ल" => "la", "व" => "va", "श" => "sha",
    "ष" => "sha", "स" => "sa", "ह" => "ha", "ळ" => "la",
    // Signs
    "ं" => "n", "ः" => "h", "्" => "", "़" => "", "ॉ" => "o", "ॅ" => "e",
    // Digits
    "०" => "0", "१" => "1", "२" => "2", "३" => "3", "४" => "4",
    "५" => "5", "६" => "6", "७" => "7", "८" => "8", "९" => "9",
};

/// Latin characters that survive NFD with no combining mark to strip:
/// atomic letters and ligatures with a conventional ASCII expansion.
pub static LATIN_RESIDUALS: Map<&'static str, &'static str> = phf_map! {
    "ß" => "ss", "ẞ" => "SS",
    "Æ" => "AE", "æ" => "ae",
    "Œ" => "OE", "œ" => "oe",
    "Ø" => "O", "ø" => "o",
    "Đ" => "D", "đ" => "d",
    "Ð" => "D", "ð" => "d",
    "Þ" => "Th", "þ" => "th",
    "Ł" => "L", "ł" => "l",
    "ı" => "i", "Ħ" => "H", "ħ" => "h",
    "Ŋ" => "Ng", "ŋ" => "ng",
};
