//! 内置拼音卡组
//!
//! 每行：(符号, emoji, 例词, 朗读用汉字)

use crate::models::{Deck, Item};

type Row = (&'static str, &'static str, &'static str, &'static str);

const INITIALS: &[Row] = &[
    ("b", "🎈", "bàba", "玻"),
    ("p", "🍇", "pútao", "坡"),
    ("m", "🐱", "māomī", "摸"),
    ("f", "🍚", "mǐfàn", "佛"),
    ("d", "🥚", "jīdàn", "得"),
    ("t", "🐰", "tùzi", "特"),
    ("n", "🐮", "nǎiniú", "讷"),
    ("l", "🐺", "láng", "勒"),
    ("g", "🐶", "gǒu", "哥"),
    ("k", "🥤", "kělè", "科"),
    ("h", "🌸", "huā", "喝"),
    ("j", "🐔", "jī", "基"),
    ("q", "🐸", "qīngwā", "欺"),
    ("x", "🍉", "xīguā", "希"),
    ("zh", "🐷", "zhū", "知"),
    ("ch", "🚗", "qìchē", "吃"),
    ("sh", "✋", "shǒu", "诗"),
    ("r", "🔥", "rè", "日"),
    ("z", "👄", "zuǐba", "资"),
    ("c", "🥬", "qīngcài", "雌"),
    ("s", "🌲", "sēnlín", "思"),
    ("y", "🦆", "yā", "衣"),
    ("w", "🧦", "wàzi", "乌"),
];

const FINALS: &[Row] = &[
    ("a", "👩", "māma", "啊"),
    ("o", "🐌", "wōniú", "喔"),
    ("e", "🦢", "é", "鹅"),
    ("i", "👕", "yīfu", "衣"),
    ("u", "🐢", "wūguī", "乌"),
    ("ü", "🟩", "lǜsè", "迂"),
    ("ai", "❤️", "àixīn", "爱"),
    ("ei", "🥛", "bēizi", "欸"),
    ("ui", "💧", "shuǐ", "威"),
    ("ao", "🐯", "lǎohǔ", "熬"),
    ("ou", "🐒", "hóuzi", "欧"),
    ("iu", "⚽", "qiú", "优"),
    ("ie", "👟", "xié", "耶"),
    ("üe", "☃️", "xuěrén", "约"),
    ("er", "👂", "ěrduo", "儿"),
    ("an", "⛰️", "shān", "安"),
    ("en", "🚪", "mén", "恩"),
    ("in", "✉️", "xìnfēng", "因"),
    ("un", "🌷", "chūntiān", "温"),
    ("ün", "👗", "qúnzi", "晕"),
    ("ang", "🐑", "yáng", "昂"),
    ("eng", "💡", "dēng", "鞥"),
    ("ing", "⭐", "xīngxing", "英"),
    ("ong", "🐉", "lóng", "轰"),
];

const OVERALL: &[Row] = &[
    ("zhi", "🕷️", "zhīzhū", "知"),
    ("chi", "🥢", "chīfàn", "吃"),
    ("shi", "🦁", "shīzi", "诗"),
    ("ri", "🎂", "shēngrì", "日"),
    ("zi", "📖", "zìdiǎn", "资"),
    ("ci", "🦔", "cìwei", "雌"),
    ("si", "🧵", "sīxiàn", "思"),
    ("yi", "🪑", "yǐzi", "衣"),
    ("wu", "🏠", "fángwū", "乌"),
    ("yu", "🐟", "xiǎoyú", "鱼"),
    ("ye", "🍃", "shùyè", "叶"),
    ("yue", "🌙", "yuèliang", "月"),
    ("yuan", "🌳", "gōngyuán", "园"),
    ("yin", "🎵", "yīnyuè", "音"),
    ("yun", "☁️", "báiyún", "云"),
    ("ying", "🦅", "lǎoyīng", "鹰"),
];

fn rows(table: &[Row]) -> Vec<Item> {
    table
        .iter()
        .map(|(char, emoji, word, pronounce)| Item::new(char, emoji, word, Some(pronounce)))
        .collect()
}

pub fn builtin_deck() -> Deck {
    Deck {
        initials: rows(INITIALS),
        finals: rows(FINALS),
        overall: rows(OVERALL),
    }
}
