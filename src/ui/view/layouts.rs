//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 在 `area` 中居中取出百分比大小的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 以中心为基准缩放矩形，结果不会超出 `bounds`
pub fn scaled_rect(rect: Rect, scale: f32, bounds: Rect) -> Rect {
    let width = ((f32::from(rect.width) * scale).round() as u16).min(bounds.width);
    let height = ((f32::from(rect.height) * scale).round() as u16).min(bounds.height);

    let center_x = rect.x + rect.width / 2;
    let center_y = rect.y + rect.height / 2;
    let x = center_x
        .saturating_sub(width / 2)
        .clamp(bounds.x, bounds.right().saturating_sub(width));
    let y = center_y
        .saturating_sub(height / 2)
        .clamp(bounds.y, bounds.bottom().saturating_sub(height));

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert!(rect.x >= 24 && rect.right() <= 76);
        assert!(rect.y >= 12 && rect.bottom() <= 38);
    }

    #[test]
    fn test_scaled_rect_keeps_center() {
        let bounds = Rect::new(0, 0, 100, 50);
        let rect = Rect::new(20, 10, 60, 30);

        assert_eq!(scaled_rect(rect, 1.0, bounds), rect);
        let small = scaled_rect(rect, 0.5, bounds);
        assert_eq!(small, Rect::new(35, 18, 30, 15));
    }

    #[test]
    fn test_scaled_rect_clamped_to_bounds() {
        let bounds = Rect::new(0, 0, 40, 20);
        let grown = scaled_rect(bounds, 1.5, bounds);
        assert_eq!(grown, bounds);
    }
}
