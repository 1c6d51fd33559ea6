//! Services grid with pricing

use super::components::{card_block, columns_for, grid, reveal_area};
use crate::app::App;
use crate::content::SERVICES;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let cells = grid(area, SERVICES.len(), columns_for(area.width));

    for (idx, (service, cell)) in SERVICES.iter().zip(cells).enumerate() {
        let Some(cell) = reveal_area(cell, &app.state.reveal, idx) else {
            continue;
        };
        let is_hovered = app.state.hovered_card == Some(idx);
        let badge = service.popular.then_some(service.highlight);

        let mut lines = vec![
            Line::from(Span::styled(service.description, Style::default().fg(Color::Gray))),
            Line::from(""),
        ];
        lines.extend(service.features.iter().map(|f| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::raw(*f),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            service.price,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        if !service.popular {
            lines.push(Line::from(Span::styled(
                service.highlight,
                Style::default().fg(Color::Yellow),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block(service.title, badge, is_hovered));
        frame.render_widget(paragraph, cell);
    }
}
