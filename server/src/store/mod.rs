use async_trait::async_trait;

use crate::error::UserError;
use crate::models::user::User;

pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

/// Storage behind the user service. The service owns the only handle to a
/// store; nothing else reads or writes the backing map/table.
///
/// Implementations must make each call atomic: no caller may observe a
/// half-applied mutation, and the compound calls (`create`, `update`) must
/// not lose against a concurrent writer of the same key.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Insert-if-absent, keyed by `user.username`. Returns whether the
    /// record was inserted; on `false` the store is unchanged.
    async fn create(&self, user: User) -> Result<bool, UserError>;

    /// Create-or-replace, keyed by `user.username`.
    async fn put(&self, user: User) -> Result<(), UserError>;

    /// Mutate the record at `username` in place, with the key held
    /// exclusively for the whole read-modify-write. Returns whether a
    /// record existed; `apply` is not called otherwise.
    async fn update(
        &self,
        username: &str,
        apply: Box<dyn FnOnce(&mut User) + Send>,
    ) -> Result<bool, UserError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, username: &str) -> Result<bool, UserError>;

    async fn exists(&self, username: &str) -> Result<bool, UserError>;
}
