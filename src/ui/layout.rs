//! Layout components (navigation bar, menu, status bar)

use crate::app::App;
use crate::content::BRAND;
use crate::platform::{CLEAR_FIELD_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Label of the call-to-action in the navigation bar
const CTA_LABEL: &str = "Get Quotation";

/// Split the screen into navigation bar and content, reserving the status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the navigation bar: brand, section links and the call-to-action
pub fn draw_nav(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        format!(" {BRAND} "),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.is_narrow() {
        spans.push(Span::styled(
            format!(" {} ", app.state.current_section.label()),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(" m:menu", Style::default().fg(Color::DarkGray)));
    } else {
        for (idx, section) in Section::NAV.iter().enumerate() {
            let style = if *section == app.state.current_section {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("{}", idx + 1), Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(format!(" {}", section.label()), style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Call-to-action on the right
    let cta = format!(" c: {CTA_LABEL} ");
    let width = cta.chars().count() as u16;
    if !app.is_narrow() && inner.width > width {
        let cta_area = Rect {
            x: inner.x + inner.width - width,
            width,
            height: 1,
            ..inner
        };
        let widget = Paragraph::new(cta).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(widget, cta_area);
    }
}

/// Draw the collapsed navigation menu as an overlay under the bar
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Section::NAV
        .iter()
        .map(|s| ListItem::new(format!(" {} ", s.label())))
        .collect();

    let height = (items.len() as u16 + 2).min(area.height);
    let width = 24u16.min(area.width);
    let menu_area = Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.state.menu_index));

    frame.render_widget(Clear, menu_area);
    frame.render_stateful_widget(list, menu_area, &mut list_state);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " q:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for what currently has focus
fn get_hints(app: &App) -> String {
    if app.state.menu_open {
        return "j/k:nav  Enter:go  Esc:close".to_string();
    }
    if app.state.form_focused {
        if app.state.contact.is_buttons_row_active() {
            return "←/→:button  Enter:press  Tab:fields  Esc:leave form".to_string();
        }
        return format!(
            "Tab:next  ←/→:option  {SUBMIT_SHORTCUT}:send  {RESET_SHORTCUT}:reset  {CLEAR_FIELD_SHORTCUT}:clear  Esc:leave form"
        );
    }

    let nav = if app.is_narrow() { "m:menu" } else { "1-5:jump" };
    match app.state.current_section {
        Section::Home => format!("{nav}  PgDn:next  c:quote  a:animations"),
        Section::About => format!("{nav}  ←/→:highlight  y:copy resume link"),
        Section::Contact => format!("{nav}  Enter:form  ←/→:highlight  y:copy"),
        Section::Footer => format!("{nav}  ←/→:highlight  y:copy link  g:top"),
        _ => format!("{nav}  PgUp/PgDn:sections  ←/→:highlight"),
    }
}
