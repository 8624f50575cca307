//! 配置：配置文件 + 命令行参数

pub mod app_config;
pub mod args;

pub use app_config::{AppConfig, SpeechConfig, TimingConfig};
pub use args::CliArgs;
