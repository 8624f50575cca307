//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Category;

/// 光标移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 页面切换
    SelectCategory(Category),
    SelectItem(usize),
    GoHome,
    BackToGrid,

    // 光标
    MoveCursor(CursorMove),
    Activate, // Enter / 空格

    // 详情页
    NextCard,
    PrevCard,
    Replay,
}
