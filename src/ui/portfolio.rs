//! Portfolio of past projects

use super::components::{card_block, columns_for, grid, reveal_area};
use crate::app::App;
use crate::content::PROJECTS;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let columns = columns_for(area.width).min(2);
    let cells = grid(area, PROJECTS.len(), columns);

    for (idx, (project, cell)) in PROJECTS.iter().zip(cells).enumerate() {
        let Some(cell) = reveal_area(cell, &app.state.reveal, idx) else {
            continue;
        };
        let is_hovered = app.state.hovered_card == Some(idx);

        let mut lines = vec![
            Line::from(Span::styled(project.description, Style::default().fg(Color::Gray))),
            Line::from(""),
        ];
        lines.extend(project.features.iter().map(|f| {
            Line::from(vec![
                Span::styled("▸ ", Style::default().fg(Color::Cyan)),
                Span::raw(*f),
            ])
        }));

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block(project.title, Some(project.highlight), is_hovered));
        frame.render_widget(paragraph, cell);
    }
}
