use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::TileMode;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    mode: TileMode,
    menu_open: bool,
    form_open: bool,
) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut hotkey_spans = vec![];

    // The edit form captures all keys
    if form_open {
        hotkey_spans.extend(vec![
            key("Tab"),
            Span::raw(":Next field  "),
            key("Enter"),
            Span::raw(":Save  "),
            key("Esc"),
            Span::raw(":Cancel"),
        ]);
        return hotkey_spans;
    }

    // Menu navigation replaces grid navigation while the menu is open
    if menu_open {
        let nav = if vim_mode { "j/k" } else { "↑/↓" };
        hotkey_spans.extend(vec![
            key(nav),
            Span::raw(":Select  "),
            key("Enter"),
            Span::raw(":Activate  "),
            key("Esc"),
            Span::raw(":Close  "),
        ]);
    } else {
        let nav = if vim_mode { "hjkl" } else { "←↑↓→" };
        hotkey_spans.extend(vec![key(nav), Span::raw(":Nav  ")]);

        match mode {
            TileMode::View => {
                hotkey_spans.extend(vec![
                    key("Enter"),
                    Span::raw(":Open  "),
                    key("m"),
                    Span::raw(":Menu  "),
                    key("e"),
                    Span::raw(":Edit Mode  "),
                ]);
            }
            TileMode::Edit => {
                hotkey_spans.extend(vec![
                    key("p"),
                    Span::raw(":Pin/Unpin  "),
                    key("Enter"),
                    Span::raw(":Edit  "),
                    key("x"),
                    Span::raw(":Dismiss  "),
                    key("e"),
                    Span::raw(":Done  "),
                ]);
            }
        }
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

fn build_legend_paragraph(
    vim_mode: bool,
    mode: TileMode,
    menu_open: bool,
    form_open: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, mode, menu_open, form_open));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with vim mode, tile mode and open popups)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    mode: TileMode,
    menu_open: bool,
    form_open: bool,
) {
    f.render_widget(build_legend_paragraph(vim_mode, mode, menu_open, form_open), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    mode: TileMode,
    menu_open: bool,
    form_open: bool,
) -> u16 {
    // Count lines without the block; line_count() mis-measures bordered paragraphs
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, mode, menu_open, form_open));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_view_mode_legend() {
        let text = spans_to_text(&build_hotkey_spans(false, TileMode::View, false, false));
        assert!(text.contains("m:Menu"));
        assert!(text.contains("e:Edit Mode"));
        assert!(!text.contains("x:Dismiss"));
        assert!(text.ends_with("q:Quit"));
    }

    #[test]
    fn test_edit_mode_legend() {
        let text = spans_to_text(&build_hotkey_spans(false, TileMode::Edit, false, false));
        assert!(text.contains("p:Pin/Unpin"));
        assert!(text.contains("x:Dismiss"));
        assert!(text.contains("e:Done"));
        assert!(!text.contains("m:Menu"));
    }

    #[test]
    fn test_vim_navigation_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, TileMode::View, false, false));
        assert!(text.contains("hjkl:Nav"));
        let text = spans_to_text(&build_hotkey_spans(true, TileMode::View, true, false));
        assert!(text.contains("j/k:Select"));
    }

    #[test]
    fn test_menu_open_legend() {
        let text = spans_to_text(&build_hotkey_spans(false, TileMode::View, true, false));
        assert!(text.contains("Esc:Close"));
        assert!(!text.contains(":Nav"));
    }

    #[test]
    fn test_form_legend_has_no_quit() {
        let text = spans_to_text(&build_hotkey_spans(false, TileMode::Edit, false, true));
        assert!(text.contains("Enter:Save"));
        assert!(!text.contains("q:Quit"));
    }

    #[test]
    fn test_legend_height_wraps_on_narrow_terminal() {
        let wide = calculate_legend_height(200, false, TileMode::Edit, false, false);
        let narrow = calculate_legend_height(30, false, TileMode::Edit, false, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
