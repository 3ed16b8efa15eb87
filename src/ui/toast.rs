use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Toast box for `message`, horizontally centered near the top of `area`
fn toast_area(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80);
    let toast_width = (message.width() as u16).saturating_add(6).min(max_width);
    let toast_height = 3.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(toast_width)) / 2,
        y: area.y + 2.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_is_centered() {
        let area = toast_area(Rect::new(0, 0, 100, 30), "Pinned");
        assert_eq!(area.width, 12);
        assert_eq!(area.x, 44);
        assert_eq!(area.y, 2);
    }

    #[test]
    fn test_long_toast_is_capped() {
        let message = "x".repeat(200);
        let area = toast_area(Rect::new(0, 0, 120, 30), &message);
        assert_eq!(area.width, 80);
    }

    #[test]
    fn test_toast_fits_tiny_area() {
        let area = toast_area(Rect::new(0, 0, 10, 2), "Opening https://mozilla.org");
        assert_eq!(area.width, 10);
        assert_eq!(area.height, 2);
        assert_eq!(area.y, 0);
    }
}
