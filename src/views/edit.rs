use super::{Field, FormInput, UserIntent};
use crate::api::{User, UserId};

pub const EDIT_HEADING: &str = "Edit User:";
pub const UPDATE_BUTTON: &str = "Update";
pub const CANCEL_BUTTON: &str = "Cancel";

/// The edit dialog, seeded from an existing user.
///
/// No validation happens here: whatever is in the fields is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditForm {
    id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    focus: usize,
}

impl EditForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            focus: 0,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    /// The edited user, id unchanged.
    pub fn user(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    pub fn confirm(&self) -> UserIntent {
        UserIntent::Update(self.user())
    }

    pub fn cancel(&self) -> UserIntent {
        UserIntent::CancelEdit
    }
}

impl FormInput for EditForm {
    const FIELDS: [Field; 3] = [Field::Name, Field::Username, Field::Email];

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
