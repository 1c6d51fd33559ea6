//! Cards laid out in a grid, sliding in as the section is revealed

use crate::state::RevealState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

/// Number of grid columns that fit in `width`
pub fn columns_for(width: u16) -> usize {
    match width {
        0..=79 => 1,
        80..=119 => 2,
        _ => 3,
    }
}

/// Split `area` into `count` cells, filled row by row
pub fn grid(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let columns = columns.clamp(1, count);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Where item `index` sits right now, or `None` before its turn to appear
pub fn reveal_area(area: Rect, reveal: &RevealState, index: usize) -> Option<Rect> {
    if !reveal.is_visible(index) {
        return None;
    }
    let offset = reveal.offset(index).min(area.width);
    Some(Rect {
        x: area.x + offset,
        width: area.width - offset,
        ..area
    })
}

/// Bordered card; the highlighted card gets a thick cyan border
pub fn card_block<'a>(title: &'a str, badge: Option<&'a str>, is_hovered: bool) -> Block<'a> {
    let (border_style, border_type) = if is_hovered {
        (Style::default().fg(Color::Cyan), BorderType::Thick)
    } else {
        (Style::default().fg(Color::DarkGray), BorderType::Rounded)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    if let Some(badge) = badge {
        block = block.title(
            Line::from(Span::styled(
                format!(" {badge} "),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ))
            .right_aligned(),
        );
    }
    block
}
