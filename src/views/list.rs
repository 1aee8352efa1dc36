use super::{EditForm, UserIntent};
use crate::api::User;

pub const LIST_HEADING: &str = "List of Users:";
pub const COLUMNS: [&str; 5] = ["User ID", "Name", "Username", "Email", "Actions"];

/// Selection and edit-dialog state of the users table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserList {
    pub selected: usize,
    /// Open edit dialog, if any.
    pub editing: Option<EditForm>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// The highlighted user. An index past the end of a shrunk list
    /// resolves to the last row, as the table draws it.
    pub fn selected_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.get(self.selected.min(users.len().saturating_sub(1)))
    }

    pub fn request_delete(&self, users: &[User]) -> Option<UserIntent> {
        self.selected_user(users)
            .map(|u| UserIntent::Delete { id: u.id })
    }

    pub fn request_edit(&self, users: &[User]) -> Option<UserIntent> {
        self.selected_user(users).map(|u| UserIntent::Edit { id: u.id })
    }

    pub fn open_editor(&mut self, user: &User) {
        self.editing = Some(EditForm::from_user(user));
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Close the dialog and pass the edited user on.
    pub fn update_user(&mut self, user: User) -> UserIntent {
        self.close_editor();
        UserIntent::Update(user)
    }
}
