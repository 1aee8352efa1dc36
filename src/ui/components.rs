//! Shared UI components (banner line, status bar, footer, modal helpers).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode};
use crate::banner::{Banner, Severity};

/// Banner background for a severity.
pub fn banner_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Success => Color::Green,
        Severity::Info => Color::Blue,
    }
}

/// Render the banner line. Nothing is drawn while the message is empty.
pub fn render_banner(f: &mut Frame, area: Rect, banner: &Banner, app: &AppState) {
    if !banner.is_visible() {
        return;
    }
    let clear_key = app
        .keymap
        .key_for(KeyAction::ClearBanner)
        .unwrap_or_else(|| "c".to_string());
    let line = Line::from(vec![
        Span::raw(format!(" {} ", banner.message)),
        Span::styled(
            format!("[{clear_key}] Clear "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let p = Paragraph::new(line).style(
        Style::default()
            .fg(Color::White)
            .bg(banner_color(banner.severity)),
    );
    f.render_widget(p, area);
}

/// Render the bottom status bar with mode, user count and key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::CreateForm => "ADD USER",
        InputMode::EditModal => "EDIT USER",
    };
    let hints = match app.input_mode {
        InputMode::Normal => "Tab: page  n: add  e: edit  d: delete  r: reload  c: clear  q: quit",
        InputMode::CreateForm => "Tab: next field  Enter: add  Esc: back",
        InputMode::EditModal => "Tab: next field  Enter: update  Esc: cancel",
    };
    let msg = format!(
        "mode: {mode}  users:{}  api: {}  {hints}",
        app.repo.users().len(),
        app.base_url
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

pub const FOOTER_MESSAGE: &str = "User Roster";
pub const FOOTER_LINK: &str = "https://ratatui.rs";

/// Project footer: name plus a link.
pub fn render_footer(f: &mut Frame, area: Rect, app: &AppState) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {FOOTER_MESSAGE} "),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("built with {FOOTER_LINK}"),
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(30, 4, area);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
