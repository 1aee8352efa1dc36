//! User repository client.
//!
//! Runs the four CRUD calls through a [`UserApi`], keeps the local user
//! collection in step with successful responses, and writes the outcome of
//! every call to the [`BannerStore`]. A failed call leaves the collection as
//! it was.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::{NewUser, User, UserApi, UserId};
use crate::banner::{BannerStore, Severity};
use crate::error::ApiResult;

pub const LOAD_OK: &str = "Loaded user data!";
pub const LOAD_FAILED: &str = "Unable to load user data!";
pub const SAVE_OK: &str = "User data was saved!";
pub const SAVE_FAILED: &str = "Unable to save user data!";

pub fn updated_message(id: UserId) -> String {
    format!("User #{id} was updated!")
}

pub fn update_failed_message(id: UserId) -> String {
    format!("Unable to update user #{id}!")
}

pub fn deleted_message(id: UserId) -> String {
    format!("User #{id} was deleted!")
}

pub fn delete_failed_message(id: UserId) -> String {
    format!("Unable to delete user #{id}!")
}

/// Cloneable handle; clones share the collection and the banner.
#[derive(Clone)]
pub struct UserRepository {
    api: Arc<dyn UserApi>,
    users: Arc<Mutex<Vec<User>>>,
    banner: BannerStore,
}

impl fmt::Debug for UserRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRepository")
            .field("users", &self.lock_users().len())
            .field("banner", &self.banner)
            .finish_non_exhaustive()
    }
}

impl UserRepository {
    pub fn new(api: Arc<dyn UserApi>, banner: BannerStore) -> Self {
        Self {
            api,
            users: Arc::new(Mutex::new(Vec::new())),
            banner,
        }
    }

    pub fn banner(&self) -> &BannerStore {
        &self.banner
    }

    /// Snapshot of the local collection, in server order.
    pub fn users(&self) -> Vec<User> {
        self.lock_users().clone()
    }

    pub fn find(&self, id: UserId) -> Option<User> {
        self.lock_users().iter().find(|u| u.id == id).cloned()
    }

    /// Fetch the collection and replace the local copy.
    pub async fn list(&self) -> ApiResult<()> {
        match self.api.list_users().await {
            Ok(users) => {
                tracing::info!(count = users.len(), "loaded users");
                *self.lock_users() = users;
                self.banner.set_banner_data(LOAD_OK, Severity::Success);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load users");
                self.banner.set_banner_data(LOAD_FAILED, Severity::Error);
                Err(err)
            }
        }
    }

    /// Create a user and append the server's copy.
    pub async fn create(&self, user: NewUser) -> ApiResult<User> {
        match self.api.create_user(&user).await {
            Ok(created) => {
                tracing::info!(id = created.id, username = %created.username, "created user");
                self.lock_users().push(created.clone());
                self.banner.set_banner_data(SAVE_OK, Severity::Success);
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, username = %user.username, "failed to create user");
                self.banner.set_banner_data(SAVE_FAILED, Severity::Error);
                Err(err)
            }
        }
    }

    /// Replace a user on the server, then the matching local entry.
    pub async fn update(&self, user: User) -> ApiResult<()> {
        let id = user.id;
        match self.api.update_user(&user).await {
            Ok(()) => {
                tracing::info!(id, "updated user");
                if let Some(slot) = self.lock_users().iter_mut().find(|u| u.id == id) {
                    *slot = user;
                }
                self.banner
                    .set_banner_data(updated_message(id), Severity::Success);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to update user");
                self.banner
                    .set_banner_data(update_failed_message(id), Severity::Error);
                Err(err)
            }
        }
    }

    /// Delete a user on the server, then drop the local entry.
    pub async fn delete(&self, id: UserId) -> ApiResult<()> {
        match self.api.delete_user(id).await {
            Ok(()) => {
                tracing::info!(id, "deleted user");
                self.lock_users().retain(|u| u.id != id);
                self.banner
                    .set_banner_data(deleted_message(id), Severity::Success);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to delete user");
                self.banner
                    .set_banner_data(delete_failed_message(id), Severity::Error);
                Err(err)
            }
        }
    }

    fn lock_users(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
