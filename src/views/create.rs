use super::{Field, FormInput, UserIntent};
use crate::api::NewUser;

pub const CREATE_HEADING: &str = "Add a New User:";

/// The "add a new user" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub name: String,
    pub email: String,
    pub username: String,
    focus: usize,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a create intent when every field is filled, then reset the form.
    /// Returns `None` and keeps the inputs otherwise.
    pub fn submit(&mut self) -> Option<UserIntent> {
        let user = NewUser {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        };
        if !user.is_complete() {
            tracing::debug!("add-user form submitted with empty fields");
            return None;
        }
        self.clear();
        Some(UserIntent::Create(user))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl FormInput for CreateForm {
    const FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::Username];

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index % Self::FIELDS.len();
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Username => &self.username,
            Field::Email => &self.email,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
        }
    }
}
