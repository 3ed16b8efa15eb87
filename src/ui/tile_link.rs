use std::str::FromStr;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::icons::{IconRenderer, TileGlyph};
use crate::logic::icon::{CornerFavicon, IconVariant};
use crate::logic::tile_link::TileLinkView;
use crate::utils::truncate_to_width;

/// Areas inside a drawn tile
pub struct TileAreas {
    pub icon: Rect,
    pub title: Rect,
    pub controls: Rect,
}

/// Split the inside of a tile into icon area, title line and controls line
pub fn tile_areas(inner: Rect) -> TileAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Icon / screenshot area
            Constraint::Length(1), // Title with pin indicator
            Constraint::Length(1), // Menu button or edit buttons
        ])
        .split(inner);

    TileAreas {
        icon: chunks[0],
        title: chunks[1],
        controls: chunks[2],
    }
}

fn parse_background_color(value: Option<&str>) -> Option<Color> {
    value.and_then(|v| Color::from_str(v).ok())
}

/// Draw the icon area for the selected variant
fn render_icon_area(f: &mut Frame, area: Rect, view: &TileLinkView, icon_renderer: &IconRenderer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let middle = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..area.height).map(|_| Line::raw("")).collect();

    let widget = match &view.icon.variant {
        IconVariant::RichIcon { .. } => {
            let bg = parse_background_color(view.icon.background_color())
                .unwrap_or(icon_renderer.theme().favicon_color);
            lines[middle as usize] = Line::from(icon_renderer.glyph(TileGlyph::Favicon));
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(bg))
        }
        IconVariant::Screenshot {
            screenshot: Some(_),
            ..
        } => {
            let shade = "░".repeat(area.width as usize);
            let mut lines: Vec<Line> = (0..area.height)
                .map(|_| Line::styled(shade.clone(), Style::default().fg(icon_renderer.theme().screenshot_color)))
                .collect();
            lines[middle as usize] = Line::from(icon_renderer.glyph(TileGlyph::Screenshot));
            Paragraph::new(lines).alignment(Alignment::Center)
        }
        IconVariant::Screenshot { screenshot: None, .. } => {
            // No image at all: the tile shows its own letter fallback
            lines[middle as usize] = Line::styled(
                view.letter_fallback.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            );
            Paragraph::new(lines).alignment(Alignment::Center)
        }
    };
    f.render_widget(widget, area);

    if let Some(corner) = view.icon.corner_favicon() {
        let span = match corner {
            CornerFavicon::Image(_) => icon_renderer.glyph(TileGlyph::Favicon),
            CornerFavicon::Letter(letter) => Span::styled(
                letter.clone(),
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            ),
        };
        let corner_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width.min(2),
            height: 1,
        };
        f.render_widget(Paragraph::new(Line::from(span)), corner_area);
    }
}

/// Render one tile shell (border, icon area, title)
///
/// Returns the line reserved for the mode controls.
pub fn render_tile_link(
    f: &mut Frame,
    area: Rect,
    view: &TileLinkView,
    is_focused: bool,
    icon_renderer: &IconRenderer,
) -> Rect {
    let border_style = if view.has_class("active") {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else if view.is_placeholder() {
        Style::default().fg(icon_renderer.theme().placeholder_color)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if view.is_placeholder() {
            BorderType::Plain
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let areas = tile_areas(inner);
    if view.is_placeholder() {
        return areas.controls;
    }

    render_icon_area(f, areas.icon, view, icon_renderer);

    let mut title_spans = Vec::new();
    let mut available = areas.title.width as usize;
    if view.is_pinned {
        title_spans.push(icon_renderer.glyph(TileGlyph::Pin));
        title_spans.push(Span::raw(" "));
        available = available.saturating_sub(3);
    }
    let title_style = if is_focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    title_spans.push(Span::styled(truncate_to_width(&view.title, available), title_style));
    f.render_widget(
        Paragraph::new(Line::from(title_spans)).alignment(Alignment::Center),
        areas.title,
    );

    areas.controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;
    use crate::ui::icons::{IconMode, IconTheme};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(view: &TileLinkView) -> String {
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = IconRenderer::new(IconMode::Emoji, IconTheme::default());
        terminal
            .draw(|f| {
                render_tile_link(f, f.area(), view, false, &renderer);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_and_pin_are_drawn() {
        let mut link = Link::new("https://mozilla.org");
        link.label = Some("mozilla".to_string());
        link.is_pinned = true;
        let text = draw(&TileLinkView::new(&link, "mozilla", None));
        assert!(text.contains("mozilla"));
        assert!(text.contains("📌"));
    }

    #[test]
    fn test_letter_fallback_without_images() {
        let link = Link::new("https://zebra.org");
        let text = draw(&TileLinkView::new(&link, "zebra", None));
        assert!(text.contains('z'));
        assert!(!text.contains("░"));
    }

    #[test]
    fn test_screenshot_is_shaded() {
        let mut link = Link::new("https://zebra.org");
        link.screenshot = Some("shot.png".to_string());
        let text = draw(&TileLinkView::new(&link, "zebra", None));
        assert!(text.contains("░"));
    }

    #[test]
    fn test_placeholder_is_empty_box() {
        let text = draw(&TileLinkView::placeholder());
        assert!(text.contains('┌'));
        assert!(!text.contains("░"));
    }

    #[test]
    fn test_background_color_parsing() {
        assert_eq!(parse_background_color(Some("#ff0000")), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_background_color(Some("not a color")), None);
        assert_eq!(parse_background_color(None), None);
    }

    #[test]
    fn test_tile_areas_reserve_title_and_controls() {
        let areas = tile_areas(Rect::new(0, 0, 10, 6));
        assert_eq!(areas.icon.height, 4);
        assert_eq!(areas.title.y, 4);
        assert_eq!(areas.controls.y, 5);
    }
}
