//! 错误类型

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 应用级错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid deck file {path}: {source}")]
    Deck {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown category `{0}` (expected initials, finals or overall)")]
    UnknownCategory(String),
}

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech program `{program}` is not available: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to start speech: {0}")]
    Spawn(#[from] io::Error),
}
