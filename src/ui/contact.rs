//! Contact section: ways to reach out and the message form

use super::components::{card_block, grid, render_button, reveal_area, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use crate::app::App;
use crate::content::{CONTACT_METHODS, EMERGENCY_NOTE};
use crate::state::{ContactForm, CONTACT_BUTTONS, SEND_BUTTON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
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
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_methods(frame, chunks[0], app);
    draw_form(frame, chunks[1], &app.state.contact, app.state.form_focused);
}

fn draw_methods(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let cells = grid(chunks[0], CONTACT_METHODS.len(), 2);
    for (idx, (method, cell)) in CONTACT_METHODS.iter().zip(cells).enumerate() {
        let Some(cell) = reveal_area(cell, &app.state.reveal, idx) else {
            continue;
        };
        let is_hovered = app.state.hovered_card == Some(idx);
        let lines = vec![
            Line::from(Span::styled(method.description, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                method.value,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(method.available, Style::default().fg(Color::Green))),
            Line::from(Span::styled(method.action, Style::default().fg(Color::DarkGray))),
        ];
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card_block(method.title, None, is_hovered));
        frame.render_widget(paragraph, cell);
    }

    let emergency = Paragraph::new(EMERGENCY_NOTE)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Emergency IT Support ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(emergency, chunks[1]);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &ContactForm, is_focused: bool) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Send Me a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let schema = form.schema();
    let mut constraints: Vec<Constraint> = schema
        .fields()
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, spec) in schema.fields().iter().enumerate() {
        let value = form.state.value(&spec.key).unwrap_or_default();
        draw_field(
            frame,
            chunks[idx],
            spec,
            value,
            is_focused && form.active_field_index == idx,
            form.is_flagged(&spec.key),
        );
    }

    let buttons_row = is_focused && form.is_buttons_row_active();
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, CONTACT_BUTTONS.len() as u32);
            CONTACT_BUTTONS.len()
        ])
        .split(chunks[schema.len()]);

    for (idx, label) in CONTACT_BUTTONS.iter().enumerate() {
        let accent = if idx == SEND_BUTTON {
            Color::Green
        } else {
            Color::Cyan
        };
        render_button(
            frame,
            button_chunks[idx],
            label,
            buttons_row && form.selected_button == idx,
            accent,
        );
    }
}
