//! Footer: blurb, quick links, social links and copyright

use super::components::reveal_area;
use crate::app::App;
use crate::content::{BRAND, FOOTER_BLURB, OWNER, SOCIAL_LINKS};
use crate::state::Section;
use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Copyright line for `year`
pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER}. All rights reserved.")
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(chunks[0]);

    let about = Paragraph::new(vec![
        Line::from(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(FOOTER_BLURB, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(about, columns[0]);

    let quick_links: Vec<Line> = std::iter::once(Line::from(Span::styled(
        "Quick Links",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .chain(Section::NAV.iter().enumerate().map(|(idx, s)| {
        Line::from(vec![
            Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(s.label()),
        ])
    }))
    .collect();
    frame.render_widget(Paragraph::new(quick_links), columns[1]);

    draw_social_links(frame, columns[2], app);

    let year = Local::now().year();
    let bottom = Paragraph::new(copyright(year))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(bottom, chunks[1]);
}

fn draw_social_links(frame: &mut Frame, area: Rect, app: &App) {
    let title = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Follow Me",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title,
    );

    for (idx, (label, url)) in SOCIAL_LINKS.iter().enumerate() {
        let y = area.y + 1 + idx as u16;
        if y >= area.bottom() {
            break;
        }
        let row = Rect {
            y,
            height: 1,
            ..area
        };
        let Some(row) = reveal_area(row, &app.state.reveal, idx) else {
            continue;
        };
        let style = if app.state.hovered_card == Some(idx) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(format!("{label:<10}"), style),
            Span::styled(format!(" {url}"), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), row);
    }
}
