use std::path::PathBuf;

use clap::Parser;

use super::app_config::LogLevel;
use crate::models::Category;

#[derive(Debug, Default, Parser)]
#[command(
    name = "pinyin-cards",
    version,
    about = "拼音卡片：声母、韵母、整体认读音节的终端闪卡",
    long_about = None
)]
pub struct CliArgs {
    /// 配置文件路径
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 日志文件路径
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// 日志级别
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// 自定义卡组文件 (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// 启动后直接进入某个分类 (initials / finals / overall)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// 关闭朗读
    #[arg(long)]
    pub mute: bool,

    /// 关闭鼠标支持
    #[arg(long)]
    pub no_mouse: bool,

    /// 固定随机种子（鼓励语可复现）
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}
