pub mod components;
pub mod forms;
pub mod pages;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Route};

pub const APP_TITLE: &str = "User Roster";

pub fn render(f: &mut Frame, app: &AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, root[0], app);
    components::render_banner(f, root[1], &app.banner.snapshot(), app);

    match app.route {
        Route::Home => users::render_home(f, root[2], app),
        Route::About => pages::render_about(f, root[2], app),
        Route::Contact => pages::render_contact(f, root[2], app),
    }

    components::render_status_bar(f, root[3], app);
    components::render_footer(f, root[4], app);

    if let Some(form) = &app.list.editing {
        forms::render_edit_modal(f, f.area(), app, form);
    }
}

/// Title plus one navigation entry per page; the active page is highlighted.
fn render_header(f: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let mut spans = Vec::with_capacity(Route::ALL.len() * 2);
    for route in Route::ALL {
        let style = if route == app.route {
            Style::default()
                .fg(app.theme.highlight_fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.header_fg)
        };
        spans.push(Span::styled(format!(" {} ", route.title()), style));
        spans.push(Span::raw(" "));
    }
    let p = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(APP_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, area);
}
