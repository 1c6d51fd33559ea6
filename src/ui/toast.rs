//! Toast overlay in the top-right corner

use crate::state::{Toast, ToastKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

/// Area of the toast inside `area`
pub fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

/// Draw `toast`, the newest of `queued` toasts
pub fn draw(frame: &mut Frame, area: Rect, toast: &Toast, queued: usize) {
    let (color, icon) = match toast.kind {
        ToastKind::Success => (Color::Green, "✔"),
        ToastKind::Error => (Color::Red, "✖"),
    };

    let text = vec![
        Line::from(Span::styled(
            format!("{icon} {}", toast.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.description.as_str()),
    ];

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_bottom(Line::from(Span::styled(
            format!(" {} · Esc ", toast.created_at.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));

    if queued > 1 {
        block = block.title(
            Line::from(Span::styled(
                format!(" +{} more ", queued - 1),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    let area = toast_area(area);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
