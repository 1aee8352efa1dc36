//! Event loop, key handling and intent dispatch.
//!
//! Keys turn into view intents; intents that need the server are handed to
//! the repository on a spawned task so the loop keeps drawing while requests
//! are in flight. Outcomes show up on the next frame through the shared
//! repository state and banner store.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::task::JoinHandle;

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode, Route};
use crate::error::ApiResult;
use crate::ui;
use crate::views::{FormInput, UserIntent};

/// Draw and handle input until the user quits. Issues one initial load.
///
/// Must be called from inside a multi-threaded tokio runtime: requests run on
/// its workers while this loop blocks on terminal input.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    app.reload();

    while !app.should_quit {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

impl AppState {
    /// Route a key press by input mode. Returns the handle of any request it started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<JoinHandle<()>> {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::CreateForm => self.handle_create_key(key.code),
            InputMode::EditModal => self.handle_edit_key(key.code),
        }
    }

    /// Carry out a view intent.
    pub fn dispatch(&mut self, intent: UserIntent) -> Option<JoinHandle<()>> {
        tracing::debug!(?intent, "dispatching intent");
        match intent {
            UserIntent::Create(user) => {
                let repo = self.repo.clone();
                Some(spawn_request(async move { repo.create(user).await.map(|_| ()) }))
            }
            UserIntent::Update(user) => {
                self.list.close_editor();
                self.input_mode = InputMode::Normal;
                let repo = self.repo.clone();
                Some(spawn_request(async move { repo.update(user).await }))
            }
            UserIntent::Delete { id } => {
                let repo = self.repo.clone();
                Some(spawn_request(async move { repo.delete(id).await }))
            }
            UserIntent::Edit { id } => {
                match self.repo.find(id) {
                    Some(user) => {
                        self.list.open_editor(&user);
                        self.input_mode = InputMode::EditModal;
                    }
                    None => tracing::debug!(id, "edit requested for unknown user"),
                }
                None
            }
            UserIntent::CancelEdit => {
                self.list.close_editor();
                self.input_mode = InputMode::Normal;
                None
            }
        }
    }

    /// Fetch the user list in the background.
    pub fn reload(&self) -> JoinHandle<()> {
        let repo = self.repo.clone();
        spawn_request(async move { repo.list().await })
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<JoinHandle<()>> {
        let action = self.keymap.resolve(&key)?;
        let on_home = self.route == Route::Home;
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                None
            }
            KeyAction::NextPage => {
                self.route = self.route.next();
                None
            }
            KeyAction::PrevPage => {
                self.route = self.route.prev();
                None
            }
            KeyAction::MoveUp if on_home => {
                let len = self.repo.users().len();
                self.list.clamp(len);
                self.list.select_prev();
                None
            }
            KeyAction::MoveDown if on_home => {
                let len = self.repo.users().len();
                self.list.clamp(len);
                self.list.select_next(len);
                None
            }
            KeyAction::NewUser if on_home => {
                self.input_mode = InputMode::CreateForm;
                None
            }
            KeyAction::EditSelection if on_home => {
                let users = self.users();
                self.list.clamp(users.len());
                let intent = self.list.request_edit(&users)?;
                self.dispatch(intent)
            }
            KeyAction::DeleteSelection if on_home => {
                let users = self.users();
                self.list.clamp(users.len());
                let intent = self.list.request_delete(&users)?;
                self.dispatch(intent)
            }
            KeyAction::Reload => Some(self.reload()),
            KeyAction::ClearBanner => {
                self.banner.clear();
                None
            }
            _ => None,
        }
    }

    fn handle_create_key(&mut self, code: KeyCode) -> Option<JoinHandle<()>> {
        let form = &mut self.create_form;
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Enter => {
                let intent = form.submit()?;
                self.input_mode = InputMode::Normal;
                return self.dispatch(intent);
            }
            _ => {}
        }
        None
    }

    fn handle_edit_key(&mut self, code: KeyCode) -> Option<JoinHandle<()>> {
        let Some(form) = self.list.editing.as_mut() else {
            self.input_mode = InputMode::Normal;
            return None;
        };
        match code {
            KeyCode::Esc => {
                let intent = form.cancel();
                return self.dispatch(intent);
            }
            KeyCode::Enter => {
                let user = form.user();
                let intent = self.list.update_user(user);
                return self.dispatch(intent);
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        }
        None
    }
}

/// Run a repository call to completion on the runtime. The banner already
/// carries the outcome, so the error is only logged.
fn spawn_request<F>(request: F) -> JoinHandle<()>
where
    F: Future<Output = ApiResult<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = request.await {
            tracing::debug!(error = %err, "request finished with error");
        }
    })
}
