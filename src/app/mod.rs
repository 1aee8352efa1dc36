//! Application state types and entry glue.
//!
//! Defines the page routes, input modes, theme and the `AppState` that ties
//! the repository, banner store and views together. The event loop lives in
//! [`update`] and is re-exported as `run`.
//!
pub mod keymap;
pub mod update;

use std::path::Path;

use ratatui::style::Color;

use crate::api::User;
use crate::banner::BannerStore;
use crate::repository::UserRepository;
use crate::views::{CreateForm, UserList};
use keymap::Keymap;

/// Top-level page shown in the body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    About,
    Contact,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Route::Home => Route::About,
            Route::About => Route::Contact,
            Route::Contact => Route::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Route::Home => Route::Contact,
            Route::About => Route::Home,
            Route::Contact => Route::About,
        }
    }
}

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    CreateForm,
    EditModal,
}

/// Color palette for theming the TUI.
///
/// Banner colours are not themable: red, green and blue carry meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub focus: Color,
}

impl Theme {
    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            focus: Color::Rgb(0xfa, 0xb3, 0x87),        // peach
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            if key.is_empty() || val.is_empty() {
                continue;
            }
            if let Some(color) = Self::parse_color(val) {
                match key {
                    "text" => theme.text = color,
                    "muted" => theme.muted = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "header_bg" => theme.header_bg = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    "focus" => theme.focus = color,
                    _ => {}
                }
            }
        }

        Some(theme)
    }

    /// Parse a color name ("cyan", "dark gray"), an index ("208"), "reset",
    /// or hex with or without the leading '#'.
    fn parse_color(s: &str) -> Option<Color> {
        let s = s.trim();
        if s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            return format!("#{s}").parse().ok();
        }
        s.parse().ok()
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-roster theme configuration\n");
        buf.push_str("# Colors: #RRGGBB, a name such as Cyan or DarkGray, an index, or Reset\n\n");

        let entries = [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("highlight_bg", self.highlight_bg),
            ("focus", self.focus),
        ];
        for (key, color) in entries {
            let _ = writeln!(&mut buf, "{key} = {color}");
        }

        std::fs::write(path, buf)
    }

    /// Load the theme at `path`, or write the defaults there and return them.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let theme = Self::mocha();
        if let Err(err) = theme.write_file(path) {
            tracing::warn!(path = %path.display(), error = %err, "could not write default theme");
        }
        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

pub struct AppState {
    pub repo: UserRepository,
    pub banner: BannerStore,
    pub route: Route,
    pub input_mode: InputMode,
    pub create_form: CreateForm,
    pub list: UserList,
    pub theme: Theme,
    pub keymap: Keymap,
    /// Shown in the status bar.
    pub base_url: String,
    pub should_quit: bool,
}

impl AppState {
    /// Build the app around a repository; the banner handle is shared with it.
    pub fn new(repo: UserRepository, theme: Theme, keymap: Keymap, base_url: impl Into<String>) -> Self {
        let banner = repo.banner().clone();
        Self {
            repo,
            banner,
            route: Route::Home,
            input_mode: InputMode::Normal,
            create_form: CreateForm::new(),
            list: UserList::new(),
            theme,
            keymap,
            base_url: base_url.into(),
            should_quit: false,
        }
    }

    /// Snapshot of the users currently held by the repository.
    pub fn users(&self) -> Vec<User> {
        self.repo.users()
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
