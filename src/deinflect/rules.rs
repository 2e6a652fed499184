//! The deinflection rule table.
//!
//! Groups are ordered; within a group, irregular whole-word rules come first
//! but do not suppress the generic rules after them.

use super::Rule::{self, ARowToU, IRowToU, Prefix, Suffix, Word};

/// Rule groups in evaluation order.
pub(super) static GROUPS: &[&[Rule]] = &[
    CONTRACTION,
    ADJECTIVE,
    POLITE,
    PASSIVE_CAUSATIVE,
    VOLITIONAL,
    NEGATION,
    TE,
    PAST,
    POTENTIAL,
    CONDITIONAL,
    CONCURRENT,
    KANJI_VARIANT,
];

/// 〜てしまう and its colloquial contractions.
static CONTRACTION: &[Rule] = &[
    Suffix("しまう", &[""]),
    Suffix("ちゃう", &["る"]),
    Suffix("いじゃう", &["ぐ"]),
    Suffix("いちゃう", &["く"]),
    Suffix("しちゃう", &["す"]),
    Suffix("んじゃう", &["む"]),
];

/// い-adjective forms.
static ADJECTIVE: &[Rule] = &[
    Suffix("よくて", &["いい"]),
    Suffix("かった", &["い"]),
    Suffix("くない", &["い"]),
    Suffix("くて", &["い"]),
    Suffix("そう", &["い"]),
    Suffix("さ", &["い"]),
    Suffix("げ", &["い"]),
    Suffix("く", &["い"]),
];

/// Polite 〜ます forms conjugate from the い-row stem.
static POLITE: &[Rule] = &[IRowToU("ます"), IRowToU("ません")];

static PASSIVE_CAUSATIVE: &[Rule] = &[
    Suffix("られる", &["る"]),
    Suffix("させる", &["る"]),
    ARowToU("れる"),
    ARowToU("せる"),
];

static VOLITIONAL: &[Rule] = &[IRowToU("たい")];

static NEGATION: &[Rule] = &[
    // Irregular: the existential verb.
    Word("ない", "ある"),
    ARowToU("ない"),
    ARowToU("ねぇ"),
    ARowToU("ず"),
];

static TE: &[Rule] = &[
    // Irregular 来る and 行く.
    Word("きて", "来る"),
    Suffix("来て", &["来る"]),
    Word("いって", "行く"),
    Suffix("行って", &["行く"]),
    Suffix("して", &["する", "す"]),
    Suffix("いて", &["く"]),
    Suffix("いで", &["ぐ"]),
    Suffix("んで", &["む", "ぶ", "ぬ"]),
    Suffix("って", &["る", "う", "つ"]),
    Suffix("て", &["る"]),
];

static PAST: &[Rule] = &[
    // Irregular する, 来る and 行く.
    Word("した", "為る"),
    Word("きた", "来る"),
    Word("来た", "来る"),
    Word("いった", "行く"),
    Suffix("行った", &["行く"]),
    Suffix("した", &["す"]),
    Suffix("いた", &["く"]),
    Suffix("いだ", &["ぐ"]),
    Suffix("んだ", &["む", "ぶ", "ぬ"]),
    Suffix("った", &["る", "う", "つ"]),
    Suffix("た", &["る"]),
];

static POTENTIAL: &[Rule] = &[
    // Irregular する and 来る.
    Word("できる", "為る"),
    Word("こられる", "来る"),
    Suffix("せる", &["す"]),
    Suffix("ける", &["く"]),
    Suffix("べる", &["ぶ"]),
    Suffix("てる", &["つ"]),
    Suffix("める", &["む"]),
    Suffix("れる", &["る"]),
    Suffix("ねる", &["ぬ"]),
    Suffix("える", &["う"]),
];

static CONDITIONAL: &[Rule] = &[
    Suffix("せば", &["す"]),
    Suffix("けば", &["く"]),
    Suffix("げば", &["ぐ"]),
    Suffix("べば", &["ぶ"]),
    Suffix("てば", &["つ"]),
    Suffix("めば", &["む"]),
    Suffix("えば", &["う"]),
    Suffix("ねば", &["ぬ"]),
    Suffix("れば", &["る"]),
];

static CONCURRENT: &[Rule] = &[IRowToU("ながら")];

/// Kanji spellings reachable from kana candidates, applied to every
/// candidate like the grammar groups above.
static KANJI_VARIANT: &[Rule] = &[
    Prefix("ご", "御"),
    Prefix("お", "御"),
    Suffix("ない", &["無い"]),
    Suffix("なし", &["無し"]),
    Suffix("つく", &["付く"]),
];

/// あ-row stem endings and their dictionary う-row endings.
pub(super) static A_ROW_TO_U: &[(&str, &str)] = &[
    // The bare stem can always belong to an ichidan verb.
    ("", "る"),
    ("さ", "す"),
    ("か", "く"),
    ("が", "ぐ"),
    ("ば", "ぶ"),
    ("た", "つ"),
    ("ま", "む"),
    ("わ", "う"),
    ("な", "ぬ"),
    ("ら", "る"),
];

/// い-row stem endings and their dictionary う-row endings.
pub(super) static I_ROW_TO_U: &[(&str, &str)] = &[
    // The bare stem can always belong to an ichidan verb, e.g. 生きます.
    ("", "る"),
    ("し", "す"),
    ("き", "く"),
    ("ぎ", "ぐ"),
    ("び", "ぶ"),
    ("ち", "つ"),
    ("み", "む"),
    ("い", "う"),
    ("に", "ぬ"),
    ("り", "る"),
];
