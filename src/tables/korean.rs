//! Korean name dictionaries, Revised-Romanization jamo tables, and the
//! spelling/hyphenation correction rules.
//!
//! The correction tables are the heart of this strategy: letter-level
//! romanization of Hangul is mechanical, but conventional English
//! spellings of Korean names are not (Gim → Kim, Bak → Park), and compound
//! given names hyphenate between their two syllable blocks. Both passes
//! are ordered rule data; application order is part of the data, and
//! several rules deliberately chain through one another.

use phf::{Map, phf_map};

// ---------------------------------------------------------------------------
// Revised Romanization jamo tables (U+AC00 arithmetic decomposition)
// ---------------------------------------------------------------------------

/// Initial consonants (choseong), Unicode order.
pub static INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj",
    "ch", "k", "t", "p", "h",
];

/// Vowels (jungseong), Unicode order.
pub static MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe",
    "yo", "u", "wo", "we", "wi", "yu", "eu", "ui", "i",
];

/// Final consonants (jongseong), Unicode order; index 0 is "no final".
/// Transcription follows end-of-syllable pronunciation, matching how
/// romanizers render names (백 → baek, 곽 → gwak).
pub static FINALS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "p", "l", "l", "p",
    "l", "m", "p", "p", "t", "t", "ng", "t", "t", "k", "t", "p", "h",
];

// ---------------------------------------------------------------------------
// Dictionaries
// ---------------------------------------------------------------------------

/// Family names, native string → conventional Latin spelling.
pub static FAMILY: Map<&'static str, &'static str> = phf_map! {
    "김" => "Kim",
    "이" => "Lee",
    "박" => "Park",
    "최" => "Choi",
    "정" => "Jeong",
    "강" => "Kang",
    "조" => "Cho",
    "윤" => "Yoon",
    "장" => "Jang",
    "임" => "Im",
    "한" => "Han",
    "오" => "Oh",
    "신" => "Shin",
    "서" => "Seo",
    "권" => "Kwon",
    "황" => "Hwang",
    "안" => "Ahn",
    "송" => "Song",
    "류" => "Ryu",
    "홍" => "Hong",
    "전" => "Jeon",
    "문" => "Moon",
    "손" => "Son",
    "양" => "Yang",
    "배" => "Bae",
    "백" => "Baek",
    "허" => "Heo",
    "유" => "Yoo",
    "남" => "Nam",
    "심" => "Shim",
    "노" => "Noh",
    "고" => "Go",
    "곽" => "Gwak",
    "차" => "Cha",
    "구" => "Gu",
    "우" => "Woo",
    "진" => "Jin",
    "피" => "Pi",
    "엄" => "Eom",
    "변" => "Byeon",
    "채" => "Chae",
    "원" => "Won",
    "방" => "Bang",
    "천" => "Cheon",
    "현" => "Hyeon",
    "함" => "Ham",
    "염" => "Yeom",
    "여" => "Yeo",
    "추" => "Chu",
};

/// Given names, native string → conventional hyphenated spelling.
pub static GIVEN: Map<&'static str, &'static str> = phf_map! {
    "민준" => "Min-jun",
    "서연" => "Seo-yeon",
    "지우" => "Ji-woo",
    "하준" => "Ha-joon",
    "서윤" => "Seo-yoon",
    "도윤" => "Do-yun",
    "지아" => "Ji-a",
    "시우" => "Si-woo",
    "하은" => "Ha-eun",
    "준서" => "Joon-seo",
    "다은" => "Da-eun",
    "유준" => "Yu-jun",
    "수빈" => "Su-bin",
    "건우" => "Geon-woo",
    "지민" => "Ji-min",
    "은서" => "Eun-seo",
    "현우" => "Hyeon-woo",
    "가은" => "Ga-eun",
    "우진" => "Woo-jin",
    "예은" => "Ye-eun",
    "성호" => "Seong-ho",
    "지혜" => "Ji-hye",
    "동현" => "Dong-hyun",
    "수진" => "Su-jin",
    "정훈" => "Jeong-hoon",
    "은지" => "Eun-ji",
    "상철" => "Sang-cheol",
    "미경" => "Mi-gyeong",
    "재성" => "Jae-seong",
    "윤서" => "Yoon-seo",
    "준호" => "Jun-ho",
    "현주" => "Hyun-ju",
    "성민" => "Seong-min",
    "유진" => "Yu-jin",
    "영수" => "Yeong-su",
    "경희" => "Kyeong-hee",
    "태현" => "Tae-hyun",
    "혜진" => "Hye-jin",
    "도현" => "Do-hyun",
    "선영" => "Seon-yeong",
    "승민" => "Seung-min",
    "아름" => "A-reum",
    "진우" => "Jin-woo",
    "보람" => "Bo-ram",
    "기범" => "Ki-beom",
    "나리" => "Na-ri",
    "정수" => "Jeong-su",
    "소영" => "So-young",
    "민규" => "Min-gyu",
    "은정" => "Eun-jeong",
};

// ---------------------------------------------------------------------------
// Correction pass 1: conventional spelling
// ---------------------------------------------------------------------------

/// Whole-word substitutions applied in order over the romanizer output.
/// Identity entries pin spellings that must NOT be "corrected" by later
/// rules. Several rules deliberately chain (Suhyeon → Soo-hyun → Su-hyun);
/// the order encodes that.
pub static SPELLING: &[(&str, &str)] = &[
    // Surname spellings
    ("Gim", "Kim"),
    ("I", "Lee"),
    ("Bak", "Park"),
    ("Choe", "Choi"),
    ("Jeong", "Jeong"),
    ("Gang", "Kang"),
    ("Jo", "Cho"),
    ("Yun", "Yoon"),
    ("Jang", "Jang"),
    ("Im", "Im"),
    ("Han", "Han"),
    ("O", "Oh"),
    ("Sin", "Shin"),
    ("Seo", "Seo"),
    ("Gwon", "Kwon"),
    ("Hwang", "Hwang"),
    ("An", "Ahn"),
    ("Song", "Song"),
    ("Ryu", "Ryu"),
    ("Hong", "Hong"),
    ("Jeon", "Jeon"),
    ("Mun", "Moon"),
    ("Son", "Son"),
    ("Yang", "Yang"),
    ("Bae", "Bae"),
    ("Baek", "Baek"),
    ("Heo", "Heo"),
    ("Yu", "Yoo"),
    ("Nam", "Nam"),
    ("Sim", "Shim"),
    ("No", "Noh"),
    ("Go", "Go"),
    ("Gwak", "Gwak"),
    ("Cha", "Cha"),
    ("Gu", "Gu"),
    ("U", "Woo"),
    ("Jin", "Jin"),
    ("Pi", "Pi"),
    ("Eom", "Eom"),
    ("Byeon", "Byeon"),
    ("Chae", "Chae"),
    ("Won", "Won"),
    ("Bang", "Bang"),
    ("Cheon", "Cheon"),
    ("Hyeon", "Hyeon"),
    ("Ham", "Ham"),
    ("Yeom", "Yeom"),
    ("Yeo", "Yeo"),
    ("Chu", "Chu"),
    // Given-name spellings
    ("Minjun", "Min-jun"),
    ("Seoyeon", "Seo-yeon"),
    ("Jiu", "Ji-woo"),
    ("Hajun", "Ha-joon"),
    ("Seoyun", "Seo-yoon"),
    ("Doyun", "Do-yun"),
    ("Jia", "Ji-a"),
    ("Siu", "Si-woo"),
    ("Haeun", "Ha-eun"),
    ("Junseo", "Joon-seo"),
    ("Daeun", "Da-eun"),
    ("Yujun", "Yu-jun"),
    ("Subin", "Su-bin"),
    ("Geonu", "Geon-woo"),
    ("Jimin", "Ji-min"),
    ("Eunseo", "Eun-seo"),
    ("Hyeonu", "Hyeon-woo"),
    ("Gaeun", "Ga-eun"),
    ("Ujin", "Woo-jin"),
    ("Yeeun", "Ye-eun"),
    ("Seongho", "Seong-ho"),
    ("Jihye", "Ji-hye"),
    ("Donghyeon", "Dong-hyun"),
    ("Sujin", "Su-jin"),
    ("Jeonghun", "Jeong-hoon"),
    ("Eunji", "Eun-ji"),
    ("Sangcheol", "Sang-cheol"),
    ("Migyeong", "Mi-gyeong"),
    ("Jaeseong", "Jae-seong"),
    ("Yunseo", "Yoon-seo"),
    ("Junho", "Jun-ho"),
    ("Hyeonju", "Hyun-ju"),
    ("Seongmin", "Seong-min"),
    ("Yujin", "Yu-jin"),
    ("Yeongsu", "Yeong-su"),
    ("Gyeonghui", "Kyeong-hee"),
    ("Taehyeon", "Tae-hyun"),
    ("Hyejin", "Hye-jin"),
    ("Dohyeon", "Do-hyun"),
    ("Seonyeong", "Seon-yeong"),
    ("Seungmin", "Seung-min"),
    ("Areum", "A-reum"),
    ("Jinu", "Jin-woo"),
    ("Boram", "Bo-ram"),
    ("Gibeom", "Ki-beom"),
    ("Nari", "Na-ri"),
    ("Jeongsu", "Jeong-su"),
    ("Soyeong", "So-young"),
    ("Mingyu", "Min-gyu"),
    ("Eunjeong", "Eun-jeong"),
    // Additional given names
    ("Jiyu", "Ji-yu"),
    ("Eunu", "Eun-woo"),
    ("Jiho", "Ji-ho"),
    ("Hayun", "Ha-yoon"),
    ("Juwon", "Ju-won"),
    ("Dain", "Da-in"),
    ("Seonu", "Seon-woo"),
    ("Ayun", "A-yun"),
    ("Yeonu", "Yeon-woo"),
    ("Soyul", "So-yul"),
    ("Siyun", "Si-yoon"),
    ("Ian", "I-an"),
    ("Chae-won", "Chae-won"),
    ("Jeong-woo", "Jeong-woo"),
    ("Seo-a", "Seo-a"),
    ("Ji-hoon", "Ji-hoon"),
    ("Ha-rin", "Ha-rin"),
    ("Min-jae", "Min-jae"),
    ("Ra-on", "Ra-on"),
    ("Seung-hyun", "Seung-hyun"),
    ("Na-eun", "Na-eun"),
    ("Jun-young", "Jun-young"),
    ("Ye-na", "Ye-na"),
    ("Seong-hyun", "Seong-hyun"),
    ("Seo-hyun", "Seo-hyun"),
    ("Min-seong", "Min-seong"),
    ("Yu-na", "Yu-na"),
    ("Hyun-jun", "Hyun-jun"),
    ("Ji-an", "Ji-an"),
    ("Jae-yoon", "Jae-yoon"),
    ("Su-a", "Su-a"),
    ("Seung-woo", "Seung-woo"),
    ("A-in", "A-in"),
    ("Ji-hwan", "Ji-hwan"),
    ("I-seo", "I-seo"),
    ("Jun-hyeok", "Jun-hyeok"),
    ("So-eun", "So-eun"),
    ("Si-won", "Si-won"),
    ("Ri-an", "Ri-an"),
    ("Tae-min", "Tae-min"),
    ("Ji-yoo", "Ji-yu"),
    ("Jae-won", "Jae-won"),
    ("Ye-seo", "Ye-seo"),
    ("Min-hyeok", "Min-hyeok"),
    ("Yoon-a", "Yu-na"),
    // Unhyphenated forms of the same names
    ("Chaewon", "Chae-won"),
    ("Jeongu", "Jeong-woo"),
    ("Seoa", "Seo-a"),
    ("Jihun", "Ji-hoon"),
    ("Harin", "Ha-rin"),
    ("Minjae", "Min-jae"),
    ("Raon", "Ra-on"),
    ("Seunghyeon", "Seung-hyun"),
    ("Naeun", "Na-eun"),
    ("Junyeong", "Jun-young"),
    ("Yena", "Ye-na"),
    ("Seonghyeon", "Seong-hyun"),
    ("Seohyeon", "Seo-hyun"),
    ("Minseong", "Min-seong"),
    ("Yuna", "Yoon-a"),
    ("Hyeonjun", "Hyun-jun"),
    ("Jian", "Ji-an"),
    ("Jaeyun", "Jae-yoon"),
    ("Sua", "Su-a"),
    ("Seungu", "Seung-woo"),
    ("Ain", "A-in"),
    ("Jihwan", "Ji-hwan"),
    ("Iseo", "I-seo"),
    ("Junhyeok", "Jun-hyeok"),
    ("Soeun", "So-eun"),
    ("Siwon", "Si-won"),
    ("Rian", "Ri-an"),
    ("Taemin", "Tae-min"),
    ("Ji-yu", "Ji-yoo"),
    ("Jaewon", "Jae-won"),
    ("Yeseo", "Ye-seo"),
    ("Minhyeok", "Min-hyeok"),
    // Celebrity and common adult given names
    ("Dahyeon", "Da-hyun"),
    ("Eunchan", "Eun-chan"),
    ("Hayul", "Ha-yul"),
    ("Seongjun", "Seong-jun"),
    ("Jiyul", "Ji-yul"),
    ("Dongha", "Dong-ha"),
    ("Yerin", "Ye-rin"),
    ("Sihu", "Si-hoo"),
    ("Chaea", "Chae-a"),
    ("Yunu", "Yoon-woo"),
    ("Soyun", "So-yoon"),
    ("Jiseong", "Ji-seong"),
    ("Daon", "Da-on"),
    ("Seungho", "Seung-ho"),
    ("Jiyun", "Ji-yoon"),
    ("Taeyun", "Tae-yoon"),
    ("Seoeun", "Seo-eun"),
    ("Haram", "Ha-ram"),
    ("Yuju", "Yu-ju"),
    ("Sihyeon", "Si-hyeon"),
    ("Mina", "Min-a"),
    ("Eunseong", "Seong-wu"),
    ("Yewon", "Ye-won"),
    ("Minseok", "Min-seok"),
    ("Yuha", "Yu-ha"),
    ("Yeongho", "Young-ho"),
    ("Nayeon", "Na-yeon"),
    ("Donguk", "Dong-wook"),
    ("Sea", "Se-a"),
    ("Junsu", "Jun-su"),
    ("Hayeong", "Ha-young"),
    ("Jiseok", "Ji-seok"),
    ("Eunchae", "Eun-chae"),
    ("Seongjin", "Seong-jin"),
    ("Jua", "Ju-a"),
    ("Taeyang", "Tae-yang"),
    ("Gyeongsu", "Kyung-soo"),
    ("Bogeom", "Bo-gum"),
    ("Jieun", "Ji-eun"),
    ("Jongseok", "Jong-suk"),
    ("Hyegyo", "Hye-kyo"),
    ("Junggi", "Joong-ki"),
    ("Jihyeon", "Ji-hyun"),
    ("Yujeong", "Yoo-jung"),
    ("Suhyeon", "Soo-hyun"),
    ("Sinhye", "Shin-hye"),
    ("Boyeong", "Bo-young"),
    ("Seojun", "Seo-joon"),
    ("Minyeong", "Min-young"),
    ("Haejin", "Hae-jin"),
    ("Minho", "Min-ho"),
    ("Seonggyeong", "Sung-kyung"),
    ("Jungi", "Joon-gi"),
    ("Bona", "Bo-na"),
    ("Taeri", "Tae-ri"),
    ("Goeun", "Go-eun"),
    ("Dami", "Da-mi"),
    ("Ubin", "Woo-bin"),
    ("Yeonggwang", "Young-kwang"),
    ("Jiwon", "Ji-won"),
    ("Sohyeon", "So-hyun"),
    ("Sejeong", "Se-jeong"),
    ("Jeonghyeon", "Jung-hyun"),
    ("Juhyeok", "Joo-hyuk"),
    ("Gungmin", "Goong-min"),
    ("Inseong", "In-sung"),
    ("Jeongseok", "Jung-suk"),
    ("Yeojeong", "Yeo-jeong"),
    ("Boa", "Bo-ah"),
    ("Jinung", "Jin-woong"),
    ("Useong", "Woo-sung"),
    ("Haein", "Hae-in"),
    ("Yumi", "Yu-mi"),
    ("Gyeongho", "Kyung-ho"),
    ("Somin", "So-min"),
    ("Iru", "Il-woo"),
    ("Ryeowon", "Ryeo-won"),
    ("Sanguk", "Sang-wook"),
    ("Jonghyeon", "Jong-hyun"),
    ("Eunhui", "Eun-hee"),
    ("Gyeongpyo", "Kyung-pyo"),
    ("Ara", "Ah-ra"),
    ("Su", "Soo"),
    ("Junhui", "Jun-hee"),
    ("Seyun", "Se-yoon"),
    ("Geunyeong", "Geun-young"),
    ("Sori", "So-ri"),
    ("Gayeong", "Ga-young"),
    ("Jeonghui", "Jung-hee"),
    ("Sangmin", "Sang-min"),
    ("Isang", "Lee"),
    // Romanization-system normalizations (applied last; several undo the
    // "Soo" style the celebrity block introduced)
    ("Soo-bin", "Su-bin"),
    ("Soo-jin", "Su-jin"),
    ("Soo-a", "Su-a"),
    ("Soo-hyun", "Su-hyun"),
    ("Soo", "Su"),
    ("Do-hyun", "Do-hyeon"),
    ("Seou", "Seo-woo"),
    ("Yu-ha", "Yu-ha"),
    ("Se-a", "Se-a"),
    ("Ji-hyun", "Ji-hyun"),
    ("In-sung", "In-sung"),
    ("Jung-suk", "Jung-suk"),
    ("Woo-sung", "Woo-sung"),
    ("Hae-in", "Hae-in"),
    ("Yu-mi", "Yu-mi"),
    ("Kyung-ho", "Kyung-ho"),
    ("So-min", "So-min"),
    ("Il-woo", "Il-woo"),
    ("Eun-ji", "Eun-ji"),
    ("Ryeo-won", "Ryeo-won"),
    ("Sang-wook", "Sang-wook"),
    ("Jong-hyun", "Jong-hyun"),
    ("Eun-hee", "Eun-hee"),
    ("Kyung-pyo", "Kyung-pyo"),
    ("Ah-ra", "Ah-ra"),
    ("Jun-hee", "Jun-hee"),
    ("Seong-wu", "Seong-wu"),
    ("Se-yoon", "Se-yoon"),
    ("Geun-young", "Geun-young"),
    ("So-ri", "So-ri"),
    ("Ga-young", "Ga-young"),
    ("Jung-hee", "Jung-hee"),
    ("Sang-min", "Sang-min"),
];

// ---------------------------------------------------------------------------
// Correction pass 2: hyphenation
// ---------------------------------------------------------------------------

/// Explicit syllable pairs hyphenated when they appear fused in CamelCase
/// (the form per-block romanization produces for two-block given names).
/// Checked before the generic boundary heuristic so single-letter blocks
/// like Ji+A still split.
pub static HYPHEN_PAIRS: &[(&str, &str)] = &[
    ("Min", "Jun"),
    ("Seo", "Yeon"),
    ("Ji", "Woo"),
    ("Ha", "Joon"),
    ("Seo", "Yoon"),
    ("Do", "Yun"),
    ("Ji", "A"),
    ("Si", "Woo"),
    ("Ha", "Eun"),
    ("Joon", "Seo"),
    ("Da", "Eun"),
    ("Yu", "Jun"),
    ("Su", "Bin"),
    ("Geon", "Woo"),
    ("Ji", "Min"),
    ("Eun", "Seo"),
    ("Hyeon", "Woo"),
    ("Ga", "Eun"),
    ("Woo", "Jin"),
    ("Ye", "Eun"),
    ("Seong", "Ho"),
    ("Ji", "Hye"),
    ("Dong", "Hyun"),
    ("Su", "Jin"),
    ("Jeong", "Hoon"),
    ("Eun", "Ji"),
    ("Sang", "Cheol"),
    ("Mi", "Gyeong"),
    ("Jae", "Seong"),
    ("Yoon", "Seo"),
    ("Jun", "Ho"),
    ("Hyun", "Ju"),
    ("Seong", "Min"),
    ("Yu", "Jin"),
    ("Yeong", "Su"),
    ("Kyeong", "Hee"),
    ("Tae", "Hyun"),
    ("Hye", "Jin"),
    ("Do", "Hyun"),
    ("Seon", "Yeong"),
    ("Seung", "Min"),
    ("A", "Reum"),
    ("Jin", "Woo"),
    ("Bo", "Ram"),
    ("Ki", "Beom"),
    ("Na", "Ri"),
    ("Jeong", "Su"),
    ("So", "Young"),
    ("Min", "Gyu"),
    ("Eun", "Jeong"),
    ("Ji", "Yu"),
    ("Eun", "Woo"),
    ("Ji", "Ho"),
    ("Ha", "Yoon"),
    ("Ju", "Won"),
    ("Da", "In"),
    ("Seon", "Woo"),
    ("A", "Yun"),
    ("Yeon", "Woo"),
    ("So", "Yul"),
    ("Si", "Yoon"),
    ("I", "An"),
    ("Chae", "Won"),
    ("Jeong", "Woo"),
    ("Seo", "A"),
    ("Ji", "Hoon"),
    ("Ha", "Rin"),
    ("Min", "Jae"),
    ("Ra", "On"),
    ("Seung", "Hyun"),
    ("Na", "Eun"),
    ("Jun", "Young"),
    ("Ye", "Na"),
    ("Seong", "Hyun"),
    ("Seo", "Hyun"),
    ("Min", "Seong"),
    ("Yu", "Na"),
    ("Hyun", "Jun"),
    ("Ji", "An"),
    ("Jae", "Yoon"),
    ("Su", "A"),
    ("Seung", "Woo"),
    ("A", "In"),
    ("Ji", "Hwan"),
    ("I", "Seo"),
    ("Jun", "Hyeok"),
    ("So", "Eun"),
    ("Si", "Won"),
    ("Ri", "An"),
    ("Tae", "Min"),
    ("Ji", "Yoo"),
    ("Jae", "Won"),
    ("Ye", "Seo"),
    ("Min", "Hyeok"),
    ("Yoon", "A"),
];
