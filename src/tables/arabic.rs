//! Arabic name dictionaries, character maps, and the IJMES strip rules.
//!
//! Dictionary spellings follow common English usage rather than strict
//! scholarly transliteration (Mohammed, not Muḥammad); regional variants
//! keep the Egyptian-leaning forms of the source data (Gamal, Ahmed).

use phf::{Map, phf_map};

/// Given names, native string → canonical Latin form.
pub static GIVEN: Map<&'static str, &'static str> = phf_map! {
    // Male names
    "محمد" => "Mohammed",
    "أحمد" => "Ahmed",
    "علي" => "Ali",
    "عمر" => "Omar",
    "يوسف" => "Youssef",
    "خالد" => "Khalid",
    "عبدالله" => "Abdullah",
    "حسين" => "Hussein",
    "مصطفى" => "Mostafa",
    "جمال" => "Gamal",
    "رضوان" => "Radwan",
    "صلاح" => "Salah",
    "شريف" => "Sherif",
    "كريم" => "Karim",
    "وليد" => "Walid",
    "أمير" => "Amir",
    "بلال" => "Bilal",
    "فارس" => "Faris",
    "نادر" => "Nader",
    "سامي" => "Sami",
    "زياد" => "Ziad",
    "هشام" => "Hisham",
    "باسم" => "Basem",
    "ماجد" => "Majid",
    "سلمان" => "Salman",
    "فهد" => "Fahd",
    "تركي" => "Turki",
    "بندر" => "Bandar",
    "طارق" => "Tariq",
    "حسن" => "Hassan",
    "عثمان" => "Othman",
    "سعيد" => "Saeed",
    "محمود" => "Mahmoud",
    "إبراهيم" => "Ibrahim",
    "عبدالرحمن" => "Abdulrahman",
    "عبد الرحمن" => "Abdul Rahman",
    "عبد" => "Abdul",
    // Female names
    "فاطمة" => "Fatima",
    "عائشة" => "Aisha",
    "زينب" => "Zainab",
    "نور" => "Nour",
    "سارة" => "Sarah",
    "هبة" => "Heba",
    "آية" => "Aya",
    "إيمان" => "Iman",
    "لمى" => "Lama",
    "مريم" => "Mariam",
    "ليلى" => "Layla",
    "هنا" => "Hana",
    "ريم" => "Reem",
    "دينا" => "Dina",
    "ياسمين" => "Yasmin",
    "منى" => "Mona",
    "ندى" => "Nada",
    "رانيا" => "Rania",
    "هدى" => "Huda",
    "سمر" => "Samar",
    "أسماء" => "Asma",
    "داليا" => "Dalia",
    "جميلة" => "Jamila",
    "غادة" => "Ghada",
    "حنان" => "Hanan",
};

/// Family names, native string → canonical Latin form.
pub static FAMILY: Map<&'static str, &'static str> = phf_map! {
    "عبدالله" => "Abdullah",
    "عبد الرحمن" => "Abdul Rahman",
    "عبدالرحمن" => "Abdulrahman",
    "عبد" => "Abdul",
    "علي" => "Ali",
    "حسين" => "Hussein",
    "حسن" => "Hassan",
    "محمد" => "Mohammed",
    "أحمد" => "Ahmed",
    "عمر" => "Omar",
    "يوسف" => "Youssef",
    "خالد" => "Khalid",
    "مصطفى" => "Mostafa",
    "جمال" => "Gamal",
    "رضوان" => "Radwan",
    "صلاح" => "Salah",
    "شريف" => "Sherif",
    "كريم" => "Karim",
    "وليد" => "Walid",
    "أمير" => "Amir",
    "بلال" => "Bilal",
    "فارس" => "Faris",
    "نادر" => "Nader",
    "سامي" => "Sami",
    "زياد" => "Ziad",
    "هشام" => "Hisham",
    "باسم" => "Basem",
    "ماجد" => "Majid",
    "سلمان" => "Salman",
    "فهد" => "Fahd",
    "تركي" => "Turki",
    "بندر" => "Bandar",
    "طارق" => "Tariq",
    "عثمان" => "Othman",
    "سعيد" => "Saeed",
    "محمود" => "Mahmoud",
    "إبراهيم" => "Ibrahim",
};

/// Literal multi-character overrides tried before single letters by the
/// longest-match scan: ligatures, the عبد prefix family, and the common
/// patronymic particles.
pub static LITERAL_OVERRIDES: Map<&'static str, &'static str> = phf_map! {
    "عبد ال" => "abd al",
    "عبد" => "abd",
    "أبو" => "abu",
    "ابن" => "ibn",
    "بن" => "bin",
    "الدين" => "al-din",
    "الله" => "allah",
    "الرحمن" => "al-rahman",
    "الرحيم" => "al-rahim",
    "لآ" => "laa",
    "لأ" => "la",
    "لإ" => "li",
    "لا" => "la",
};

/// Plain character map for the tier-4 fallback. Values are ASCII; vowel
/// marks carry their short vowel, combining marks with no Latin
/// counterpart map to the empty string.
pub static CHAR_MAP: Map<&'static str, &'static str> = phf_map! {
    // Basic letters
    "ا" => "a", "ب" => "b", "ت" => "t", "ث" => "th", "ج" => "j",
    "ح" => "h", "خ" => "kh", "د" => "d", "ذ" => "dh", "ر" => "r",
    "ز" => "z", "س" => "s", "ش" => "sh", "ص" => "s", "ض" => "d",
    "ط" => "t", "ظ" => "z", "ع" => "a", "غ" => "gh", "ف" => "f",
    "ق" => "q", "ك" => "k", "ل" => "l", "م" => "m", "ن" => "n",
    "ه" => "h", "و" => "w", "ي" => "y",
    // Harakat
    "\u{064E}" => "a", "\u{064F}" => "u", "\u{0650}" => "i",
    "\u{0651}" => "", "\u{0652}" => "",
    "\u{064B}" => "an", "\u{064C}" => "un", "\u{064D}" => "in",
    // Hamza carriers and specials
    "ة" => "a", "ى" => "a", "ء" => "", "آ" => "aa", "أ" => "a",
    "إ" => "i", "ؤ" => "u", "ئ" => "i",
    // Extended letters (Persian/Urdu)
    "گ" => "g", "چ" => "ch", "پ" => "p", "ژ" => "zh", "ڤ" => "v",
    "ڨ" => "q", "ڭ" => "ng",
};

/// Closest-equivalent fallback for Arabic-block codepoints outside
/// [`CHAR_MAP`]; anything absent here becomes `?`.
pub static EXTENDED_FALLBACK: Map<&'static str, &'static str> = phf_map! {
    "ڪ" => "k", "ګ" => "g", "ڬ" => "g", "ڮ" => "n",
    "ڰ" => "p", "ڱ" => "m", "ڲ" => "n", "ڳ" => "g", "ڴ" => "g",
    "ڵ" => "l", "ڶ" => "l", "ڷ" => "l", "ڸ" => "l", "ڹ" => "n",
    "ں" => "n", "ڻ" => "n", "ڼ" => "n", "ڽ" => "n", "ھ" => "h",
    "ڿ" => "ch", "ۀ" => "h", "ہ" => "h", "ۂ" => "h", "ۃ" => "h",
    "ۄ" => "w", "ۅ" => "o", "ۆ" => "o", "ۇ" => "u", "ۈ" => "u",
    "ۉ" => "u", "ۊ" => "w", "ۋ" => "v", "ی" => "y", "ۍ" => "y",
    "ێ" => "y", "ۏ" => "w", "ې" => "e", "ۑ" => "y",
};

/// IJMES-style letter map used by the library tier. Emphatics keep their
/// under-dots and long vowels their macrons; the strip pass below reduces
/// them to plain letters afterwards.
pub static IJMES: Map<&'static str, &'static str> = phf_map! {
    "ا" => "ā", "ب" => "b", "ت" => "t", "ث" => "th", "ج" => "ǧ",
    "ح" => "ḥ", "خ" => "ḫ", "د" => "d", "ذ" => "dh", "ر" => "r",
    "ز" => "z", "س" => "s", "ش" => "š", "ص" => "ṣ", "ض" => "ḍ",
    "ط" => "ṭ", "ظ" => "ẓ", "ع" => "ʿ", "غ" => "ġ", "ف" => "f",
    "ق" => "q", "ك" => "k", "ل" => "l", "م" => "m", "ن" => "n",
    "ه" => "h", "و" => "w", "ي" => "y",
    "\u{064E}" => "a", "\u{064F}" => "u", "\u{0650}" => "i",
    "\u{0651}" => "", "\u{0652}" => "",
    "\u{064B}" => "an", "\u{064C}" => "un", "\u{064D}" => "in",
    "ة" => "a", "ى" => "ā", "ء" => "ʾ", "آ" => "ā", "أ" => "a",
    "إ" => "i", "ؤ" => "ʾu", "ئ" => "ʾi",
};

/// Ordered strip rules applied to IJMES output. Order is significant:
/// the guttural digraphs must resolve before the long vowels.
pub static DIACRITIC_STRIP: &[(&str, &str)] = &[
    ("ʿ", ""),
    ("ʾ", ""),
    ("ḥ", "h"),
    ("ṭ", "t"),
    ("ṣ", "s"),
    ("ḍ", "d"),
    ("ẓ", "z"),
    ("ġ", "gh"),
    ("ḫ", "kh"),
    ("š", "sh"),
    ("ǧ", "j"),
    ("ā", "a"),
    ("ī", "i"),
    ("ū", "u"),
    ("ē", "e"),
    ("ō", "o"),
];
