//! View-models for the Home page: the add-user form, the edit dialog and the
//! users table.
//!
//! Views hold only their own input state. Data flows in as `&[User]` or
//! `&User`; user requests flow out as [`UserIntent`] values which the app
//! dispatches to the repository.

pub mod create;
pub mod edit;
pub mod list;

pub use create::CreateForm;
pub use edit::EditForm;
pub use list::UserList;

use crate::api::{NewUser, User, UserId};

/// What a view asks the app to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserIntent {
    Create(NewUser),
    Update(User),
    Delete { id: UserId },
    Edit { id: UserId },
    CancelEdit,
}

/// Text fields shared by the add and edit forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Username,
    Email,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Username => "Username:",
            Field::Email => "Email:",
        }
    }
}

/// Focus and editing behaviour of a three-field text form.
pub trait FormInput {
    /// Field order as displayed.
    const FIELDS: [Field; 3];

    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);
    fn value(&self, field: Field) -> &str;
    fn value_mut(&mut self, field: Field) -> &mut String;

    fn focused_field(&self) -> Field {
        Self::FIELDS[self.focus() % Self::FIELDS.len()]
    }

    fn focus_next(&mut self) {
        self.set_focus((self.focus() + 1) % Self::FIELDS.len());
    }

    fn focus_prev(&mut self) {
        let len = Self::FIELDS.len();
        self.set_focus((self.focus() + len - 1) % len);
    }

    fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        self.value_mut(field).push(c);
    }

    fn backspace(&mut self) {
        let field = self.focused_field();
        self.value_mut(field).pop();
    }

    fn set_value(&mut self, field: Field, value: &str) {
        *self.value_mut(field) = value.to_string();
    }
}
