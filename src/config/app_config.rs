//! 应用配置

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::args::CliArgs;
use crate::error::AppError;
use crate::models::Category;

const APP_NAME: &str = "pinyin-cards";

/// 日志级别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// 朗读设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// 语音合成程序，需支持 `--voices` 列出声音
    #[serde(default = "default_speech_program")]
    pub program: String,

    /// 语速，1.0 为正常速度
    #[serde(default = "default_speech_rate")]
    pub rate: f32,

    /// 语言标签
    #[serde(default = "default_speech_language")]
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_speech_program(),
            rate: default_speech_rate(),
            language: default_speech_language(),
        }
    }
}

/// 动画与定时设置（毫秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub autoplay_delay_ms: u64,
    pub card_pop_ms: u64,
    pub pulse_ms: u64,
    pub bounce_ms: u64,
    pub encouragement_ms: u64,
    pub tile_stagger_ms: u64,
    pub tick_ms: u64,
    /// 向后翻卡时再次弹出鼓励语的概率
    pub encouragement_chance: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 500,
            card_pop_ms: 400,
            pulse_ms: 200,
            bounce_ms: 300,
            encouragement_ms: 3000,
            tile_stagger_ms: 50,
            tick_ms: 33,
            encouragement_chance: 0.3,
        }
    }
}

impl TimingConfig {
    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }

    pub fn card_pop(&self) -> Duration {
        Duration::from_millis(self.card_pop_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn bounce(&self) -> Duration {
        Duration::from_millis(self.bounce_ms)
    }

    pub fn encouragement(&self) -> Duration {
        Duration::from_millis(self.encouragement_ms)
    }

    pub fn tile_stagger(&self) -> Duration {
        Duration::from_millis(self.tile_stagger_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// 应用配置（配置文件 + 命令行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(skip)]
    pub config: Option<PathBuf>,

    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default = "default_true")]
    pub mouse: bool,

    /// 自定义卡组文件
    #[serde(default)]
    pub deck: Option<PathBuf>,

    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(skip)]
    pub start_category: Option<Category>,

    #[serde(skip)]
    pub seed: Option<u64>,
}

fn default_true() -> bool {
    true
}

fn default_speech_program() -> String {
    "espeak-ng".to_string()
}

fn default_speech_rate() -> f32 {
    0.1
}

fn default_speech_language() -> String {
    "zh-CN".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            deck: None,
            speech: SpeechConfig::default(),
            timing: TimingConfig::default(),
            start_category: None,
            seed: None,
        }
    }
}

impl AppConfig {
    /// 读取配置文件（不存在则用默认值），再合并命令行参数
    pub fn load(args: CliArgs) -> Result<Self, AppError> {
        let path = args.config.clone().or_else(Self::default_config_path);

        let mut config = match &path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.config = path;
        config.merge_with_args(args);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "read config file");
        Ok(config)
    }

    /// 合并命令行参数，命令行优先
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(deck) = args.deck {
            self.deck = Some(deck);
        }
        if args.mute {
            self.speech.enabled = false;
        }
        if args.no_mouse {
            self.mouse = false;
        }
        self.start_category = args.category;
        self.seed = args.seed;
    }

    /// 默认配置文件 (~/.config/pinyin-cards/config.toml)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// 默认日志文件 (~/.local/share/pinyin-cards/pinyin-cards.log)
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_NAME).join(format!("{APP_NAME}.log")))
    }

    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}
