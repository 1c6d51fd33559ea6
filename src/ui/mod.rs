//! UI module for rendering the TUI

mod about;
mod components;
mod contact;
mod footer;
mod forms;
mod home;
mod layout;
mod portfolio;
mod services;
mod toast;

use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (nav_area, content_area) = layout::create_layout(area);

    layout::draw_nav(frame, nav_area, app);

    let section = app.state.current_section;
    let inner = draw_section_frame(frame, content_area, section);
    match section {
        Section::Home => home::draw(frame, inner, app),
        Section::Services => services::draw(frame, inner, app),
        Section::About => about::draw(frame, inner, app),
        Section::Portfolio => portfolio::draw(frame, inner, app),
        Section::Contact => contact::draw(frame, inner, app),
        Section::Footer => footer::draw(frame, inner, app),
    }

    layout::draw_status_bar(frame, app);

    if app.state.menu_open {
        layout::draw_menu(frame, content_area, app);
    }

    if let Some(toast) = app.state.toasts.newest() {
        toast::draw(frame, content_area, toast, app.state.toasts.len());
    }
}

/// Section heading, e.g. "#services", around the section body
fn draw_section_frame(frame: &mut Frame, area: Rect, section: Section) -> Rect {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" #{} ", section.anchor()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
