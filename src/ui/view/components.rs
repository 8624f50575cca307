//! 通用 UI 组件
//!
//! 面板、网格方块、人物气泡等

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::encourage::Persona;
use crate::ui::state::Bubble;
use crate::highlight::Segment;

/// [组件] 带标题的面板，返回内部区域
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 网格中的一个拼音方块
pub fn render_tile(frame: &mut Frame, area: Rect, symbol: &str, is_focused: bool) {
    let (style, border) = if is_focused {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            BorderType::Thick,
        )
    } else {
        (Style::default().fg(Color::Cyan), BorderType::Rounded)
    };

    let tile = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border),
        );
    frame.render_widget(tile, area);
}

/// [组件] 爸爸/妈妈的位置，气泡里有话时显示鼓励语
pub fn render_persona_slot(
    frame: &mut Frame,
    area: Rect,
    persona: Persona,
    bubble: &Bubble,
    alignment: Alignment,
) {
    let color = match persona {
        Persona::Dad => Color::LightBlue,
        Persona::Mom => Color::LightMagenta,
    };

    let mut lines = vec![Line::from(Span::styled(
        persona.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(message) = bubble.message {
        lines.push(Line::from(Span::styled(
            format!("💬 {message}"),
            Style::default().fg(Color::White).bg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
}

/// 例词片段转为带样式的一行，高亮部分加粗、下划线、标红
pub fn word_line(segments: &[Segment]) -> Line<'_> {
    let highlight = Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let plain = Style::default().fg(Color::White);

    Line::from(
        segments
            .iter()
            .map(|s| Span::styled(s.text.as_str(), if s.highlighted { highlight } else { plain }))
            .collect::<Vec<_>>(),
    )
}
