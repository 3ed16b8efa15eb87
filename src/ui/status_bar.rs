use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Link;
use crate::store::StoreStats;
use crate::TileMode;

/// Build the plain status text (extracted for testability)
fn build_status_line(
    focused_slot: usize,
    count: usize,
    focused_link: Option<&Link>,
    mode: TileMode,
    pinned_count: usize,
    stats: StoreStats,
    last_action: Option<&str>,
) -> String {
    let mut metrics = vec![format!("Slot: {}/{}", focused_slot + 1, count)];

    match focused_link {
        Some(link) => {
            metrics.push(format!("Site: {}", link.title()));
            metrics.push(format!("URL: {}", link.url));
            if link.is_pinned {
                metrics.push("Pinned".to_string());
            }
        }
        None => metrics.push("Empty".to_string()),
    }

    metrics.push(format!("Mode: {}", mode.as_str()));
    metrics.push(format!("Pinned sites: {}", pinned_count));
    if stats.blocked > 0 {
        metrics.push(format!("Blocked: {}", stats.blocked));
    }
    if stats.events > 0 {
        metrics.push(format!("Events: {}", stats.events));
    }

    if let Some(action) = last_action {
        metrics.push(format!("Last: {}", action));
    }

    metrics.join(" | ")
}

/// Color the labels (text before the first colon) of each status part
fn style_status_line(status_line: &str) -> Vec<Span<'_>> {
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if part == "Pinned" {
            spans.push(Span::styled(part, Style::default().fg(Color::Yellow)));
        } else if part == "Empty" {
            spans.push(Span::styled(part, Style::default().fg(Color::DarkGray)));
        } else if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value));
        } else {
            spans.push(Span::raw(part));
        }
    }
    spans
}

/// Render the bottom status bar for the focused slot
#[allow(clippy::too_many_arguments)]
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    focused_slot: usize,
    count: usize,
    focused_link: Option<&Link>,
    mode: TileMode,
    pinned_count: usize,
    stats: StoreStats,
    last_action: Option<&str>,
) {
    let status_line = build_status_line(
        focused_slot,
        count,
        focused_link,
        mode,
        pinned_count,
        stats,
        last_action,
    );

    let status_bar = Paragraph::new(Line::from(style_status_line(&status_line)))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
