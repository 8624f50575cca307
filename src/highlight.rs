//! 例词高亮
//!
//! 在例词中标出目标拼音符号的所有出现位置。匹配不区分声调和大小写：
//! 目标中的每个元音可以匹配它的四个声调形式或不带调的字母，`ü` 还可以匹配 `v`。

use regex::Regex;
use tracing::warn;

/// 例词中的一段文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// 元音对应的声调字符类
fn tone_class(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("[aāáǎà]"),
        'o' => Some("[oōóǒò]"),
        'e' => Some("[eēéěè]"),
        'i' => Some("[iīíǐì]"),
        'u' => Some("[uūúǔù]"),
        'ü' | 'v' => Some("[üǖǘǚǜv]"),
        _ => None,
    }
}

/// 为目标符号构造匹配模式，空目标返回 `None`
pub fn build_pattern(target: &str) -> Option<Regex> {
    if target.is_empty() {
        return None;
    }

    let mut pattern = String::from("(?i)");
    let mut buf = [0u8; 4];
    for c in target.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        match tone_class(lower) {
            Some(class) => pattern.push_str(class),
            None => pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(target_symbol = target, error = %e, "failed to build highlight pattern");
            None
        }
    }
}

/// 把例词切分为高亮/普通片段，片段按顺序拼接后等于原词
pub fn highlight(word: &str, target: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(regex) = build_pattern(target) else {
        if !word.is_empty() {
            segments.push(Segment::plain(word));
        }
        return segments;
    };

    let mut last = 0;
    for m in regex.find_iter(word) {
        if m.start() > last {
            segments.push(Segment::plain(&word[last..m.start()]));
        }
        segments.push(Segment::marked(m.as_str()));
        last = m.end();
    }
    if last < word.len() {
        segments.push(Segment::plain(&word[last..]));
    }

    segments
}
