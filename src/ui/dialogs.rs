use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::intl::FormatMessage;
use crate::model::{EditFormState, FormField};

/// One labelled input line; placeholder shown dimmed when empty
fn input_line<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: String,
    focused: bool,
) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(format!("{:<7}", label), label_style)];
    if value.is_empty() {
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(value));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }
    Line::from(spans)
}

/// Render the add/edit top site form
pub fn render_edit_form(
    f: &mut Frame,
    form: &EditFormState,
    is_new: bool,
    intl: &dyn FormatMessage,
) {
    let header = if is_new {
        intl.format_message("topsites_form_add_header")
    } else {
        intl.format_message("topsites_form_edit_header")
    };

    let lines = vec![
        Line::raw(""),
        input_line(
            "Title:",
            &form.label,
            intl.format_message("topsites_form_title_placeholder"),
            form.field == FormField::Label,
        ),
        Line::raw(""),
        input_line(
            "URL:",
            &form.url,
            intl.format_message("topsites_form_url_placeholder"),
            form.field == FormField::Url,
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(format!(":{}  ", intl.format_message("topsites_form_save_button"))),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(":Next field  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(format!(":{}", intl.format_message("topsites_form_cancel_button"))),
        ]),
    ];

    // Center the form
    let area = f.area();
    let form_width = 60.min(area.width);
    let form_height = 9.min(area.height);
    let form_area = Rect {
        x: (area.width.saturating_sub(form_width)) / 2,
        y: (area.height.saturating_sub(form_height)) / 2,
        width: form_width,
        height: form_height,
    };

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (slot {})", header, form.index + 1))
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, form_area);
    f.render_widget(prompt, form_area);
}
