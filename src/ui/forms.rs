//! The add-user form and the edit dialog.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{AppState, InputMode};
use crate::views::create::CREATE_HEADING;
use crate::views::edit::{CANCEL_BUTTON, EDIT_HEADING, UPDATE_BUTTON};
use crate::views::{CreateForm, EditForm, FormInput};

/// One line per field; the focused field gets a marker and cursor while `active`.
fn field_lines<F: FormInput>(form: &F, active: bool, app: &AppState) -> Vec<Line<'static>> {
    F::FIELDS
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let focused = active && idx == form.focus();
            let marker = if focused { "▶ " } else { "  " };
            let cursor = if focused { "_" } else { "" };
            let label_style = if focused {
                Style::default().fg(app.theme.focus).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.title)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<10}", field.label()), label_style),
                Span::styled(
                    format!("{}{cursor}", form.value(*field)),
                    Style::default().fg(app.theme.text),
                ),
            ])
        })
        .collect()
}

pub fn render_create_form(f: &mut Frame, area: Rect, app: &AppState) {
    let active = app.input_mode == InputMode::CreateForm;
    let form: &CreateForm = &app.create_form;
    let border = if active { app.theme.focus } else { app.theme.border };
    let p = Paragraph::new(field_lines(form, active, app)).block(
        Block::default()
            .title(CREATE_HEADING)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(p, area);
}

pub fn render_edit_modal(f: &mut Frame, area: Rect, app: &AppState, form: &EditForm) {
    let rect = crate::ui::components::centered_rect(56, 9, area);
    let mut lines = field_lines(form, true, app);
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            format!("  [Enter] {UPDATE_BUTTON}"),
            Style::default().fg(app.theme.highlight_fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("[Esc] {CANCEL_BUTTON}"), Style::default().fg(app.theme.muted)),
    ]));
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(format!("{EDIT_HEADING} #{}", form.id()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.focus)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
