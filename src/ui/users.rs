use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::app::AppState;
use crate::views::list::{COLUMNS, LIST_HEADING};

/// Home page: add-user form above the users table.
pub fn render_home(f: &mut Frame, area: Rect, app: &AppState) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);
    crate::ui::forms::render_create_form(f, parts[0], app);
    render_users_table(f, parts[1], app);
}

pub fn render_users_table(f: &mut Frame, area: Rect, app: &AppState) {
    let users = app.users();

    let rows = users.iter().map(|u| {
        Row::new(vec![
            Cell::from(u.id.to_string()),
            Cell::from(u.name.clone()),
            Cell::from(u.username.clone()),
            Cell::from(u.email.clone()),
            Cell::from("Delete | Edit"),
        ])
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Length(13),
    ];

    let header = Row::new(COLUMNS.to_vec()).style(
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(LIST_HEADING)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(Style::default().fg(app.theme.text))
        .row_highlight_style(
            Style::default()
                .fg(app.theme.highlight_fg)
                .bg(app.theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .column_spacing(1);

    let mut state = TableState::default();
    if !users.is_empty() {
        state.select(Some(app.list.selected.min(users.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut state);
}
