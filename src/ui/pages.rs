//! Static About and Contact pages.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;

/// A short post shown on the About page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogEntry {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const BLOG_ENTRIES: [BlogEntry; 3] = [
    BlogEntry {
        title: "My Favorite Aspects of Ratatui",
        summary: "Immediate-mode rendering keeps the UI a plain function of state.",
    },
    BlogEntry {
        title: "Talking to REST APIs with Reqwest",
        summary: "One client, a timeout, and a status check cover most CRUD needs.",
    },
    BlogEntry {
        title: "Sharing State Between Tasks",
        summary: "A cloneable handle around a mutex is often all a small app needs.",
    },
];

pub fn render_about(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = Vec::with_capacity(BLOG_ENTRIES.len() * 3);
    for entry in BLOG_ENTRIES {
        lines.push(Line::from(Span::styled(
            entry.title,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            entry.summary,
            Style::default().fg(app.theme.text),
        )));
        lines.push(Line::default());
    }
    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Blog Posts")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}

pub fn render_contact(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = vec![
        Line::from(Span::styled(
            "Contact",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("API endpoint: {}", app.base_url)),
        Line::from("Report problems through the project's issue tracker."),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .title("Contact")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}
