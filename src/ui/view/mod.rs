//! 视图层模块
//!
//! 包含主渲染入口和三个页面（首页、网格、详情）的渲染。
//! 渲染时顺带记录鼠标可点击区域。

pub mod components;
pub mod layouts;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::actions::Action;
use super::state::{App, Hitbox, View};
use crate::encourage::Persona;
use crate::models::Category;
use components::{render_panel, render_persona_slot, render_tile, word_line};
use layouts::{centered_rect, scaled_rect};

const TILE_WIDTH: u16 = 8;
const TILE_HEIGHT: u16 = 3;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    app.hitboxes.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 标题 + 爸爸妈妈
            Constraint::Min(10),   // 页面
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.view {
        View::Home => render_home(frame, app, chunks[1]),
        View::Grid => render_grid(frame, app, chunks[1], now),
        View::Detail => render_detail(frame, app, chunks[1], now),
    }
    render_help(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " 🀄 拼音卡片 ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (persona, half, alignment) in [
        (Persona::Dad, halves[0], Alignment::Left),
        (Persona::Mom, halves[1], Alignment::Right),
    ] {
        let bubble = app.bubble(persona);
        // 弹跳时气泡上移一行
        let offset = if bubble.bouncing { 0 } else { 1 };
        let slot = Rect {
            y: half.y + offset.min(half.height.saturating_sub(2)),
            height: half.height.min(2),
            ..half
        };
        render_persona_slot(frame, slot, persona, bubble, alignment);
    }
}

fn render_home(frame: &mut Frame, app: &mut App, area: Rect) {
    let panel = centered_rect(60, 80, area);
    let inner = render_panel(frame, panel, " 选一个开始吧 ", Color::Cyan);

    for (i, category) in Category::ALL.into_iter().enumerate() {
        let row = Rect {
            y: inner.y + 1 + (i as u16) * 2,
            height: 1,
            ..inner
        };
        if row.bottom() > inner.bottom() {
            break;
        }

        let style = if i == app.home_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };
        let text = format!(
            " {}. {}  · {} 张",
            i + 1,
            category.title(),
            app.deck.items(category).len()
        );
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            row,
        );
        app.hitboxes.push(Hitbox {
            area: row,
            action: Action::SelectCategory(category),
        });
    }
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let title = app
        .nav
        .category
        .map(|c| format!(" {} ", c.title()))
        .unwrap_or_default();
    let inner = render_panel(frame, area, &title, Color::Cyan);

    let columns = (inner.width / TILE_WIDTH).max(1);
    app.grid_columns = usize::from(columns);

    if app.nav.list.is_empty() {
        frame.render_widget(
            Paragraph::new("这里还没有卡片").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    // 整体水平居中
    let used = (columns * TILE_WIDTH).min(inner.width);
    let left = inner.x + (inner.width - used) / 2;

    for (i, item) in app.nav.list.iter().enumerate() {
        let (row, col) = (i / app.grid_columns, i % app.grid_columns);
        let tile = Rect {
            x: left + (col as u16) * TILE_WIDTH,
            y: inner.y + (row as u16) * TILE_HEIGHT,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        };
        if tile.bottom() > inner.bottom() || tile.right() > inner.right() {
            continue;
        }
        if !app.tile_visible(i, now) {
            continue;
        }

        render_tile(frame, tile, &item.char, i == app.grid_cursor);
        app.hitboxes.push(Hitbox {
            area: tile,
            action: Action::SelectItem(i),
        });
    }
}

fn render_detail(frame: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let Some(card) = app.card.clone() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(1)])
        .split(area);

    // 弹出：从 0.8 倍放大到原尺寸；朗读脉冲时再放大一点
    let base = centered_rect(50, 90, chunks[0]);
    let progress = app.card_anim.progress(now, app.timing.card_pop());
    let mut scale = 0.8 + 0.2 * progress;
    if app.pulsing {
        scale *= 1.05;
    }
    let card_area = scaled_rect(base, scale, chunks[0]);

    let border_color = if app.pulsing {
        Color::LightMagenta
    } else {
        Color::Yellow
    };
    let counter = format!(" {} / {} ", app.nav.index + 1, app.nav.list.len());
    let block = Block::default()
        .title(counter)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(border_color));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            card.symbol.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(card.emoji.clone()),
        Line::from(""),
        word_line(&card.word),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    app.hitboxes.push(Hitbox {
        area: card_area,
        action: Action::Replay,
    });

    // 底部按钮
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);
    for (rect, label, action) in [
        (buttons[0], "◀ 上一张", Action::PrevCard),
        (buttons[1], "🔊 再听一遍", Action::Replay),
        (buttons[2], "下一张 ▶", Action::NextCard),
    ] {
        frame.render_widget(
            Paragraph::new(label)
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center),
            rect,
        );
        app.hitboxes.push(Hitbox { area: rect, action });
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.view {
        View::Home => "[1/2/3] 选择分类  [j/k] 移动  [Enter] 进入  [q] 退出",
        View::Grid => "[←↓↑→/hjkl] 移动  [Enter] 打开  [Esc] 首页  [q] 退出",
        View::Detail => {
            "[←/p] 上一张  [→/n/空格] 下一张  [Enter/r] 再听  [Esc/b] 返回  [g] 首页  [q] 退出"
        }
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
