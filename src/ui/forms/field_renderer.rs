//! Field rendering utilities for forms

use crate::state::{display_value, FieldSpec};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(spec: &FieldSpec) -> u16 {
    if spec.is_multiline {
        6
    } else {
        3
    }
}

/// Draw a schema field; flagged fields are outlined in red
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &str,
    is_active: bool,
    is_flagged: bool,
) {
    let border_style = if is_flagged {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (text, is_placeholder) = display_value(spec, value);
    let text_style = if is_placeholder {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    // Selects show arrows instead of a text cursor
    let cursor = match (is_active, spec.kind.is_select()) {
        (false, _) => "",
        (true, true) => " ◂▸",
        (true, false) => "▌",
    };
    let cursor_style = Style::default().fg(Color::Cyan);

    let mut lines: Vec<Line> = if is_placeholder {
        vec![Line::from(Span::styled(text, text_style))]
    } else {
        text.split('\n')
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect()
    };

    if is_active {
        // Typing into an empty text field hides the placeholder
        if is_placeholder && !spec.kind.is_select() {
            lines = vec![Line::from(Span::styled(cursor, cursor_style))];
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
    }

    let title = if is_flagged {
        Line::from(vec![
            Span::raw(format!(" {} ", spec.label)),
            Span::styled("required ", Style::default().fg(Color::Red)),
        ])
    } else {
        Line::from(format!(" {} ", spec.label))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph.block(block), area);
}
