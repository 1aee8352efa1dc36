//! User records and the port used to reach the users endpoint.
//!
//! [`UserApi`] is the seam between the repository and the transport: the
//! binary plugs in [`http::HttpUserApi`], tests plug in an in-memory fake.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;

/// Server-assigned user identifier.
pub type UserId = u64;

/// A user as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Body of a create request; the server assigns the id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl NewUser {
    /// All three fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.username.is_empty() && !self.email.is_empty()
    }

    /// Attach an id, as the server does on create.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }
}

/// CRUD calls against the user collection.
///
/// Implementations map every failure (unreachable host, timeout, non-2xx
/// status, undecodable body) to an [`ApiError`](crate::error::ApiError) and
/// never panic.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> ApiResult<Vec<User>>;
    /// `POST /users`, returning the stored user.
    async fn create_user(&self, user: &NewUser) -> ApiResult<User>;
    /// `PUT /users/{id}` with the full user.
    async fn update_user(&self, user: &User) -> ApiResult<()>;
    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: UserId) -> ApiResult<()>;
}
