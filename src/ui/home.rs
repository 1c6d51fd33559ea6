//! Hero section

use super::components::reveal_area;
use crate::app::App;
use crate::content::{
    HERO_BADGE, HERO_BENEFITS, HERO_INTRO, HERO_TAGLINE, HERO_TITLE, OWNER, TRUST_STATS,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),                          // Headline
            Constraint::Length(HERO_BENEFITS.len() as u16), // Benefits
            Constraint::Length(1),                          // Spacer
            Constraint::Length(2),                          // Trust stats
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let headline = vec![
        Line::from(Span::styled(
            format!(" {HERO_BADGE} "),
            Style::default().fg(Color::Black).bg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(OWNER, Style::default().fg(Color::White))),
        Line::from(Span::styled(HERO_INTRO, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            HERO_TAGLINE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(
        Paragraph::new(headline).wrap(Wrap { trim: true }),
        chunks[0],
    );

    // Benefits slide in one after another
    for (idx, benefit) in HERO_BENEFITS.iter().enumerate() {
        let row = Rect {
            y: chunks[1].y + idx as u16,
            height: 1,
            ..chunks[1]
        };
        if row.y >= chunks[1].bottom() {
            break;
        }
        if let Some(row) = reveal_area(row, &app.state.reveal, idx) {
            let line = Line::from(vec![
                Span::styled("✔ ", Style::default().fg(Color::Green)),
                Span::raw(*benefit),
            ]);
            frame.render_widget(Paragraph::new(line), row);
        }
    }

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, TRUST_STATS.len() as u32);
            TRUST_STATS.len()
        ])
        .split(chunks[3]);
    for ((figure, caption), cell) in TRUST_STATS.iter().zip(stats.iter()) {
        let text = vec![
            Line::from(Span::styled(
                *figure,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*caption, Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *cell);
    }
}
