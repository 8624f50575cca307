use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::data;
use crate::error::AppError;

/// 拼音分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Initials, // 声母
    Finals,   // 韵母
    Overall,  // 整体认读音节
}

impl Category {
    /// 首页上的显示顺序
    pub const ALL: [Category; 3] = [Category::Initials, Category::Finals, Category::Overall];

    /// 分类标识（与数据文件中的表名一致）
    pub fn id(self) -> &'static str {
        match self {
            Category::Initials => "initials",
            Category::Finals => "finals",
            Category::Overall => "overall",
        }
    }

    /// 网格页标题
    pub fn title(self) -> &'static str {
        match self {
            Category::Initials => "声母 (Initials)",
            Category::Finals => "韵母 (Finals)",
            Category::Overall => "整体认读 (Syllables)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}

/// 一张拼音卡片
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// 拼音符号本身，如 "b"、"ang"
    pub char: String,
    pub emoji: String,
    /// 含有该符号的例词
    pub word: String,
    /// 朗读时使用的文本（通常是汉字），缺省时读 `char`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronounce: Option<String>,
}

impl Item {
    pub fn new(char: &str, emoji: &str, word: &str, pronounce: Option<&str>) -> Self {
        Self {
            char: char.to_string(),
            emoji: emoji.to_string(),
            word: word.to_string(),
            pronounce: pronounce.map(str::to_string),
        }
    }

    /// 交给语音合成的文本
    pub fn speech_text(&self) -> &str {
        self.pronounce.as_deref().unwrap_or(&self.char)
    }
}

/// 卡组：分类 -> 有序卡片列表（只读）
///
/// 同时也是 TOML 卡组文件的结构，缺少的表视为空列表。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub initials: Vec<Item>,
    #[serde(default)]
    pub finals: Vec<Item>,
    #[serde(default)]
    pub overall: Vec<Item>,
}

impl Deck {
    /// 内置卡组
    pub fn builtin() -> Self {
        data::builtin_deck()
    }

    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Initials => &self.initials,
            Category::Finals => &self.finals,
            Category::Overall => &self.overall,
        }
    }

    pub fn len(&self) -> usize {
        self.initials.len() + self.finals.len() + self.overall.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
