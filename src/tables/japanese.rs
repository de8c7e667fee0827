//! Japanese name dictionaries and macron rules.
//!
//! Dictionary values carry proper Hepburn macrons (Satō, Tarō); the
//! `normalized` request flag strips them afterwards via [`MACRON_STRIP`].

use phf::{Map, phf_map};

/// Given names, native string → romaji with macrons.
pub static GIVEN: Map<&'static str, &'static str> = phf_map! {
    "太郎" => "Tarō",
    "花子" => "Hanako",
    "一郎" => "Ichirō",
    "次郎" => "Jirō",
    "三郎" => "Saburō",
    "美子" => "Miko",
    "恵子" => "Keiko",
    "由美" => "Yumi",
    "直子" => "Naoko",
    "裕子" => "Yūko",
    "美穂" => "Miho",
    "智子" => "Tomoko",
    "恵美" => "Emi",
    "麻美" => "Asami",
    "美香" => "Mika",
    "愛" => "Ai",
    "優" => "Yū",
    "翔" => "Shō",
    "大輔" => "Daisuke",
    "健太" => "Kenta",
    "翔太" => "Shōta",
    "大樹" => "Daiki",
    "海斗" => "Kaito",
    "陽太" => "Yōta",
    "陸" => "Riku",
    "颯太" => "Sōta",
    "大和" => "Yamato",
    "蓮" => "Ren",
    "さくら" => "Sakura",
    "直樹" => "Naoki",
    "美咲" => "Misaki",
    "翼" => "Tsubasa",
    "あきら" => "Akira",
    "春樹" => "Haruki",
    "優子" => "Yūko",
    "誠" => "Makoto",
    "拓也" => "Takuya",
    "真理" => "Mari",
    "浩" => "Hiroshi",
    "杏" => "An",
    "亮" => "Ryō",
};

/// Family names, native string → romaji with macrons.
pub static FAMILY: Map<&'static str, &'static str> = phf_map! {
    "田中" => "Tanaka",
    "佐藤" => "Satō",
    "鈴木" => "Suzuki",
    "高橋" => "Takahashi",
    "渡辺" => "Watanabe",
    "伊藤" => "Itō",
    "山本" => "Yamamoto",
    "中村" => "Nakamura",
    "小林" => "Kobayashi",
    "加藤" => "Katō",
    "吉田" => "Yoshida",
    "山田" => "Yamada",
    "佐々木" => "Sasaki",
    "山口" => "Yamaguchi",
    "松本" => "Matsumoto",
    "井上" => "Inoue",
    "木村" => "Kimura",
    "林" => "Hayashi",
    "斎藤" => "Saitō",
    "清水" => "Shimizu",
};

/// Macron restoration applied to engine output, whole word → corrected
/// word. Ordered; first match wins. The long name forms come first so
/// "Shota" restores as a unit before the bare "Sho" rule could touch it.
pub static MACRON_RESTORE: &[(&str, &str)] = &[
    ("Taro", "Tarō"),
    ("Ichiro", "Ichirō"),
    ("Jiro", "Jirō"),
    ("Saburo", "Saburō"),
    ("Sato", "Satō"),
    ("Ito", "Itō"),
    ("Kato", "Katō"),
    ("Saito", "Saitō"),
    ("Yuko", "Yūko"),
    ("Yu", "Yū"),
    ("Sho", "Shō"),
    ("Shota", "Shōta"),
    ("Yota", "Yōta"),
    ("Sota", "Sōta"),
    ("Ryo", "Ryō"),
    ("Yoko", "Yōko"),
    ("Toyo", "Tōyō"),
    ("Kyo", "Kyō"),
    ("Myo", "Myō"),
    ("Yo", "Yō"),
    ("Ko", "Kō"),
    ("So", "Sō"),
    ("To", "Tō"),
    ("No", "Nō"),
    ("Mo", "Mō"),
    ("Ho", "Hō"),
    ("Go", "Gō"),
    ("Do", "Dō"),
    ("Bo", "Bō"),
    ("Po", "Pō"),
    ("Zo", "Zō"),
    ("Jo", "Jō"),
    ("Cho", "Chō"),
    ("Tsu", "Tsū"),
    ("Su", "Sū"),
    ("Ku", "Kū"),
    ("Mu", "Mū"),
    ("Nu", "Nū"),
    ("Fu", "Fū"),
    ("Ru", "Rū"),
    ("Gu", "Gū"),
    ("Zu", "Zū"),
    ("Bu", "Bū"),
    ("Pu", "Pū"),
    ("Ju", "Jū"),
    ("Chu", "Chū"),
    ("Shu", "Shū"),
];

/// Macron removal for `normalized` output, applied over the whole string.
pub static MACRON_STRIP: &[(char, char)] = &[
    ('ō', 'o'),
    ('ū', 'u'),
    ('ē', 'e'),
    ('ā', 'a'),
    ('ī', 'i'),
    ('Ō', 'O'),
    ('Ū', 'U'),
    ('Ē', 'E'),
    ('Ā', 'A'),
    ('Ī', 'I'),
];
