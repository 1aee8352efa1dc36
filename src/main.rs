//! user-roster binary entry point.
//!
//! Parses configuration, sets up file logging, initializes the terminal in raw
//! mode, runs the TUI event loop, and restores the terminal state on exit.
//!
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use user_roster::api::http::HttpUserApi;
use user_roster::app::keymap::Keymap;
use user_roster::app::{self, AppState, Theme};
use user_roster::banner::BannerStore;
use user_roster::config::Config;
use user_roster::repository::UserRepository;

/// Send `tracing` output to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_file)?;
    tracing::info!(base_url = %config.base_url, "starting user-roster");

    let api = HttpUserApi::new(&config.base_url, config.timeout())
        .context("configure user API client")?;
    let repo = UserRepository::new(Arc::new(api), BannerStore::new());
    let theme = Theme::load_or_init(&config.theme);
    let keymap = Keymap::load_or_init(&config.keybinds);
    let mut state = AppState::new(repo, theme, keymap, config.base_url.clone());

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
