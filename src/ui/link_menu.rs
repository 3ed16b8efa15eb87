use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::intl::FormatMessage;
use crate::logic::link_menu::LinkMenuProps;

const MENU_WIDTH: u16 = 34;

/// Place the popup just below `anchor`, kept inside `bounds`
fn popup_area(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let width = MENU_WIDTH.min(bounds.width);
    let height = height.min(bounds.height);

    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    Rect {
        x: anchor.x.min(max_x),
        y: (anchor.y + 1).min(max_y),
        width,
        height,
    }
}

/// Render the link context menu popup next to the tile's menu button
pub fn render_link_menu(
    f: &mut Frame,
    anchor: Rect,
    menu: &LinkMenuProps,
    selection: usize,
    intl: &dyn FormatMessage,
) {
    if !menu.visible {
        return;
    }

    let entries = menu.items();
    let inner_width = MENU_WIDTH.saturating_sub(2) as usize;
    let list_items: Vec<ListItem> = entries
        .iter()
        .map(|item| match item.label_id() {
            Some(id) => ListItem::new(Span::raw(intl.format_message(id))),
            None => ListItem::new(Span::styled(
                "─".repeat(inner_width),
                Style::default().fg(Color::DarkGray),
            )),
        })
        .collect();

    let area = popup_area(anchor, f.area(), entries.len() as u16 + 2);

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", menu.site.title()))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(selection.min(entries.len().saturating_sub(1))));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_below_anchor() {
        let bounds = Rect::new(0, 0, 100, 40);
        let area = popup_area(Rect::new(10, 5, 18, 1), bounds, 9);
        assert_eq!(area, Rect::new(10, 6, MENU_WIDTH, 9));
    }

    #[test]
    fn test_popup_clamped_to_bounds() {
        let bounds = Rect::new(0, 0, 60, 20);
        let area = popup_area(Rect::new(50, 18, 18, 1), bounds, 9);
        assert_eq!(area.x, 60 - MENU_WIDTH);
        assert_eq!(area.y, 11);
    }

    #[test]
    fn test_popup_on_tiny_terminal() {
        let bounds = Rect::new(0, 0, 20, 5);
        let area = popup_area(Rect::new(0, 0, 18, 1), bounds, 9);
        assert_eq!(area, Rect::new(0, 0, 20, 5));
    }
}
