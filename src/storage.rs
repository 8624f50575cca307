use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{Category, Deck};

/// 加载卡组：未指定文件时使用内置卡组
pub fn load_deck(path: Option<&Path>) -> Result<Deck, AppError> {
    let Some(path) = path else {
        return Ok(Deck::builtin());
    };

    let content = fs::read_to_string(path)?;
    let deck = parse_deck(&content, path)?;

    if deck.is_empty() {
        warn!(path = %path.display(), "deck file contains no items");
    }
    for category in Category::ALL {
        if deck.items(category).is_empty() {
            warn!(%category, path = %path.display(), "deck file has no items for category");
        }
    }
    info!(path = %path.display(), items = deck.len(), "loaded deck");

    Ok(deck)
}

/// 从 TOML 文本解析卡组
pub fn parse_deck(content: &str, path: &Path) -> Result<Deck, AppError> {
    toml::from_str(content).map_err(|source| AppError::Deck {
        path: path.to_path_buf(),
        source,
    })
}
