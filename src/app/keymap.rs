//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! Only Normal mode goes through the keymap. The add-user form and the edit
//! dialog take raw text input and handle their few keys directly.

use std::collections::HashMap;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic keyboard actions that can be bound to key combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Go to the next page (Home, About, Contact).
    NextPage,
    /// Go to the previous page.
    PrevPage,
    /// Move up in the users table.
    MoveUp,
    /// Move down in the users table.
    MoveDown,
    /// Focus the add-user form.
    NewUser,
    /// Open the edit dialog for the selected user.
    EditSelection,
    /// Delete the selected user.
    DeleteSelection,
    /// Fetch the user list again.
    Reload,
    /// Clear the banner.
    ClearBanner,
    /// Ignore this key.
    Ignore,
}

/// Maps `(modifiers, code)` pairs to [`KeyAction`]s.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Create a keymap with default keybindings (arrows plus vim-style j/k).
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::NONE, Esc), KeyAction::Ignore);
        bindings.insert((M::NONE, Tab), KeyAction::NextPage);
        // Shift+Tab arrives as BackTab, with or without SHIFT depending on the terminal
        bindings.insert((M::NONE, BackTab), KeyAction::PrevPage);
        bindings.insert((M::SHIFT, BackTab), KeyAction::PrevPage);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('n')), KeyAction::NewUser);
        bindings.insert((M::NONE, Char('e')), KeyAction::EditSelection);
        bindings.insert((M::NONE, Enter), KeyAction::EditSelection);
        bindings.insert((M::NONE, Char('d')), KeyAction::DeleteSelection);
        bindings.insert((M::NONE, Delete), KeyAction::DeleteSelection);
        bindings.insert((M::NONE, Char('r')), KeyAction::Reload);
        bindings.insert((M::NONE, Char('c')), KeyAction::ClearBanner);
        Self { bindings }
    }

    /// Load the keymap at `path`, or write the defaults there and return them.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(err) = km.write_file(path) {
            tracing::warn!(path = %path.display(), error = %err, "could not write default keybindings");
        }
        km
    }

    /// Load a keymap from `<Action> = <KeySpec>` lines, layered over the defaults.
    ///
    /// Returns `None` if the file cannot be read. Unknown actions or keys are
    /// skipped.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::from_config_str(&contents))
    }

    pub fn from_config_str(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            match (parse_action(lhs), parse_key(rhs)) {
                (Some(action), Some(key)) => {
                    map.bindings.insert(key, action);
                }
                _ => tracing::debug!(line, "skipping unrecognised keybinding"),
            }
        }
        map
    }

    /// Write the default-style binding list to `path`.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-roster keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: q, Ctrl+q, Enter, Esc, Tab, BackTab, Up, Down, Delete, j, k\n");
        buf.push_str("# Actions: Quit, NextPage, PrevPage, MoveUp, MoveDown, NewUser, EditSelection, DeleteSelection, Reload, ClearBanner, Ignore\n\n");

        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|((mods, code), action)| (format_action(*action), Self::format_key(*mods, *code)))
            .collect();
        entries.sort();
        entries.dedup();
        for (action, key) in entries {
            let _ = writeln!(&mut buf, "{} = {}", action, key);
        }

        std::fs::write(path, buf)
    }

    /// Resolve a key event to its action, if bound.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// First key bound to `action`, formatted for the status bar.
    pub fn key_for(&self, action: KeyAction) -> Option<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort_by_key(|k| (k.len(), k.clone()));
        keys.into_iter().next()
    }

    /// Format a key (modifiers + code) into a spec like "Ctrl+q" or "BackTab".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Delete => "Delete".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            BackTab => "BackTab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Delete" => Delete,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "BackTab" => BackTab,
        "Up" => Up,
        "Down" => Down,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    match s.trim() {
        "Quit" => Some(KeyAction::Quit),
        "NextPage" => Some(KeyAction::NextPage),
        "PrevPage" => Some(KeyAction::PrevPage),
        "MoveUp" => Some(KeyAction::MoveUp),
        "MoveDown" => Some(KeyAction::MoveDown),
        "NewUser" => Some(KeyAction::NewUser),
        "EditSelection" => Some(KeyAction::EditSelection),
        "DeleteSelection" => Some(KeyAction::DeleteSelection),
        "Reload" => Some(KeyAction::Reload),
        "ClearBanner" => Some(KeyAction::ClearBanner),
        "Ignore" => Some(KeyAction::Ignore),
        _ => None,
    }
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::NextPage => "NextPage",
        KeyAction::PrevPage => "PrevPage",
        KeyAction::MoveUp => "MoveUp",
        KeyAction::MoveDown => "MoveDown",
        KeyAction::NewUser => "NewUser",
        KeyAction::EditSelection => "EditSelection",
        KeyAction::DeleteSelection => "DeleteSelection",
        KeyAction::Reload => "Reload",
        KeyAction::ClearBanner => "ClearBanner",
        KeyAction::Ignore => "Ignore",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_handles_ctrl_and_named_keys() {
        assert_eq!(parse_key("Ctrl+q"), Some((KeyModifiers::CONTROL, KeyCode::Char('q'))));
        assert_eq!(parse_key(" Escape "), Some((KeyModifiers::NONE, KeyCode::Esc)));
        assert_eq!(parse_key("PgUp"), None);
    }

    #[test]
    fn every_action_round_trips_through_its_name() {
        for action in [
            KeyAction::Quit,
            KeyAction::NextPage,
            KeyAction::PrevPage,
            KeyAction::MoveUp,
            KeyAction::MoveDown,
            KeyAction::NewUser,
            KeyAction::EditSelection,
            KeyAction::DeleteSelection,
            KeyAction::Reload,
            KeyAction::ClearBanner,
            KeyAction::Ignore,
        ] {
            assert_eq!(parse_action(format_action(action)), Some(action));
        }
    }
}
