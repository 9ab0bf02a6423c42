use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::UserStore;
use crate::error::UserError;
use crate::models::user::User;

/// In-memory username → user map. Lives only as long as the process.
///
/// Atomicity comes from the map's per-shard locking: `create` decides and
/// inserts under one entry lock, `update` holds the write lock across the
/// whole read-modify-write.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.get(username).map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: User) -> Result<bool, UserError> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(user);
                Ok(true)
            }
        }
    }

    async fn put(&self, user: User) -> Result<(), UserError> {
        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    async fn update(
        &self,
        username: &str,
        apply: Box<dyn FnOnce(&mut User) + Send>,
    ) -> Result<bool, UserError> {
        match self.users.get_mut(username) {
            Some(mut entry) => {
                apply(entry.value_mut());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, username: &str) -> Result<bool, UserError> {
        Ok(self.users.remove(username).is_some())
    }

    async fn exists(&self, username: &str) -> Result<bool, UserError> {
        Ok(self.users.contains_key(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            ..User::default()
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_the_record() {
        let store = MemoryStore::new();
        store.put(user("alice")).await.unwrap();

        let found = store.get("alice").await.unwrap();
        assert_eq!(found, Some(user("alice")));
        assert!(store.exists("alice").await.unwrap());
    }

    #[tokio::test]
    async fn get_on_empty_store_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("alice").await.unwrap(), None);
        assert!(!store.exists("alice").await.unwrap());
    }

    #[tokio::test]
    async fn create_refuses_an_occupied_key_and_keeps_the_record() {
        let store = MemoryStore::new();
        assert!(store.create(user("alice")).await.unwrap());

        let mut second = user("alice");
        second.email = "other@example.com".to_string();
        assert!(!store.create(second).await.unwrap());

        assert_eq!(store.get("alice").await.unwrap(), Some(user("alice")));
    }

    #[tokio::test]
    async fn put_overwrites_the_existing_record() {
        let store = MemoryStore::new();
        store.put(user("alice")).await.unwrap();

        let mut updated = user("alice");
        updated.email = "new@example.com".to_string();
        store.put(updated.clone()).await.unwrap();

        assert_eq!(store.get("alice").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_mutates_in_place_only_when_present() {
        let store = MemoryStore::new();

        let touched = store
            .update("alice", Box::new(|u| u.email = "x@example.com".to_string()))
            .await
            .unwrap();
        assert!(!touched);

        store.put(user("alice")).await.unwrap();
        let touched = store
            .update("alice", Box::new(|u| u.email = "x@example.com".to_string()))
            .await
            .unwrap();
        assert!(touched);
        assert_eq!(
            store.get("alice").await.unwrap().unwrap().email,
            "x@example.com"
        );
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_existed() {
        let store = MemoryStore::new();
        assert!(!store.delete("alice").await.unwrap());

        store.put(user("alice")).await.unwrap();
        assert!(store.delete("alice").await.unwrap());
        assert_eq!(store.get("alice").await.unwrap(), None);
    }
}
