//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将按键和点击转换为 Action

use std::time::Instant;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::{Action, CursorMove};
use super::state::{App, View};
use crate::models::Category;

/// 根据当前页面和按键获取对应的 Action
pub fn get_action(view: View, key: KeyCode) -> Option<Action> {
    if key == KeyCode::Char('q') {
        return Some(Action::Quit);
    }

    match view {
        View::Home => match key {
            KeyCode::Char('1') => Some(Action::SelectCategory(Category::Initials)),
            KeyCode::Char('2') => Some(Action::SelectCategory(Category::Finals)),
            KeyCode::Char('3') => Some(Action::SelectCategory(Category::Overall)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveCursor(CursorMove::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveCursor(CursorMove::Down)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        View::Grid => match key {
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveCursor(CursorMove::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveCursor(CursorMove::Down)),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveCursor(CursorMove::Left)),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveCursor(CursorMove::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::GoHome),
            _ => None,
        },
        View::Detail => match key {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Char(' ') => {
                Some(Action::NextCard)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(Action::PrevCard),
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::Replay),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::BackToGrid),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::GoHome),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match get_action(app.view, key) {
        Some(action) => app.dispatch(action, now),
        None => false,
    }
}

/// 处理鼠标事件：左键点击命中区域
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    match app.hit_test(mouse.column, mouse.row) {
        Some(action) => app.dispatch(action, now),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(View::Home, KeyCode::Char('2'), Some(Action::SelectCategory(Category::Finals)) ; "home_number_selects")]
    #[test_case(View::Home, KeyCode::Enter, Some(Action::Activate) ; "home_enter")]
    #[test_case(View::Home, KeyCode::Esc, Some(Action::Quit) ; "home_escape_quits")]
    #[test_case(View::Grid, KeyCode::Left, Some(Action::MoveCursor(CursorMove::Left)) ; "grid_left")]
    #[test_case(View::Grid, KeyCode::Esc, Some(Action::GoHome) ; "grid_escape_goes_home")]
    #[test_case(View::Grid, KeyCode::Char('n'), None ; "grid_ignores_next")]
    #[test_case(View::Detail, KeyCode::Right, Some(Action::NextCard) ; "detail_next")]
    #[test_case(View::Detail, KeyCode::Char('p'), Some(Action::PrevCard) ; "detail_prev")]
    #[test_case(View::Detail, KeyCode::Enter, Some(Action::Replay) ; "detail_replay")]
    #[test_case(View::Detail, KeyCode::Esc, Some(Action::BackToGrid) ; "detail_back")]
    #[test_case(View::Detail, KeyCode::Char('g'), Some(Action::GoHome) ; "detail_home")]
    #[test_case(View::Detail, KeyCode::Char('q'), Some(Action::Quit) ; "detail_quit")]
    fn test_key_mapping(view: View, key: KeyCode, expected: Option<Action>) {
        assert_eq!(get_action(view, key), expected);
    }
}
