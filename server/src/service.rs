use std::sync::Arc;

use tracing::debug;

use crate::error::UserError;
use crate::models::user::User;
use crate::store::UserStore;

/// Business rules over a [`UserStore`], one method per HTTP verb.
///
/// The service holds the only handle to the store, so the invariants below
/// (one record per username, no partial mutations) hold process-wide.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// POST = create, never overwrite. The store decides atomically, so of
    /// two concurrent creates for one username exactly one wins and the
    /// store is untouched on failure.
    pub async fn post_user(&self, user: User) -> Result<(), UserError> {
        debug!(username = %user.username, "creating user");
        if self.store.create(user).await? {
            Ok(())
        } else {
            Err(UserError::AlreadyExists)
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<User, UserError> {
        self.store.get(username).await?.ok_or(UserError::NotFound)
    }

    /// PUT = create or replace. The body must agree with the path key; no
    /// prior record is required.
    pub async fn put_user(&self, username: &str, user: User) -> Result<(), UserError> {
        if username != user.username {
            return Err(UserError::InconsistentIds);
        }
        debug!(%username, "upserting user");
        self.store.put(user).await
    }

    /// PATCH = update existing, never create. Non-empty fields of `user`
    /// overwrite the stored record; empty fields are left untouched. The
    /// username itself is the key and is never merged. The merge runs
    /// inside the store's read-modify-write lock, so concurrent patches
    /// of one user serialize instead of losing updates.
    pub async fn patch_user(&self, username: &str, user: User) -> Result<(), UserError> {
        if !user.username.is_empty() && username != user.username {
            return Err(UserError::InconsistentIds);
        }

        debug!(%username, "patching user");
        let merged = self
            .store
            .update(
                username,
                Box::new(move |existing: &mut User| {
                    if !user.first_name.is_empty() {
                        existing.first_name = user.first_name;
                    }
                    if !user.last_name.is_empty() {
                        existing.last_name = user.last_name;
                    }
                    if !user.password.is_empty() {
                        existing.password = user.password;
                    }
                    if !user.email.is_empty() {
                        existing.email = user.email;
                    }
                    if !user.role.is_empty() {
                        existing.role = user.role;
                    }
                }),
            )
            .await?;

        if merged {
            Ok(())
        } else {
            Err(UserError::NotFound)
        }
    }

    pub async fn delete_user(&self, username: &str) -> Result<(), UserError> {
        if self.store.delete(username).await? {
            debug!(%username, "deleted user");
            Ok(())
        } else {
            Err(UserError::NotFound)
        }
    }
}
