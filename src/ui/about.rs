//! About section: skill bars and achievements

use super::components::{card_block, grid, reveal_area};
use crate::app::App;
use crate::content::{ACHIEVEMENTS, OWNER, RESUME_FILE_NAME, SKILLS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let direction = if app.is_narrow() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_skills(frame, chunks[0], app.config.resume_url());

    let cells = grid(chunks[1], ACHIEVEMENTS.len(), 2);
    for (idx, (achievement, cell)) in ACHIEVEMENTS.iter().zip(cells).enumerate() {
        let Some(cell) = reveal_area(cell, &app.state.reveal, idx) else {
            continue;
        };
        let is_hovered = app.state.hovered_card == Some(idx);
        let lines = vec![
            Line::from(Span::styled(achievement.description, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(achievement.highlight, Style::default().fg(Color::Yellow))),
        ];
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block(achievement.title, None, is_hovered));
        frame.render_widget(paragraph, cell);
    }
}

fn draw_skills(frame: &mut Frame, area: Rect, resume_url: &str) {
    let block = Block::default()
        .title(format!(" About {OWNER} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let resume = vec![
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(format!(" Copy resume link ({RESUME_FILE_NAME})")),
        ]),
        Line::from(Span::styled(resume_url, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(resume), parts[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); SKILLS.len()])
        .split(parts[0]);

    for (skill, row) in SKILLS.iter().zip(rows.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*row);

        let label = Line::from(vec![
            Span::raw(skill.name),
            Span::styled(format!("  {}", skill.highlight), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(label), parts[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(skill.level.min(100))
            .label(format!("{}%", skill.level));
        frame.render_widget(gauge, parts[1]);
    }
}
