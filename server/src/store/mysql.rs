use async_trait::async_trait;
use sqlx::MySqlPool;

use super::UserStore;
use crate::error::UserError;
use crate::models::user::User;

/// MySQL-backed store. Uniqueness comes from the primary key on `username`:
/// `create` lets the key constraint arbitrate between concurrent inserts,
/// `put` gets its upsert semantics from `ON DUPLICATE KEY UPDATE`, and
/// `update` locks the row for the whole read-modify-write.
#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: MySqlPool,
}

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    username   VARCHAR(255) NOT NULL PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    password   TEXT NOT NULL,
    email      TEXT NOT NULL,
    role       TEXT NOT NULL
)";

const SELECT_USER: &str = "SELECT username, first_name, last_name, password, email, role \
                           FROM users WHERE username = ?";

fn internal(err: sqlx::Error) -> UserError {
    UserError::Internal(err.to_string())
}

impl MySqlStore {
    /// Wraps a pool and makes sure the users table exists.
    pub async fn new(pool: MySqlPool) -> Result<Self, UserError> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(internal)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl UserStore for MySqlStore {
    async fn get(&self, username: &str) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, User>(SELECT_USER)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)
    }

    async fn create(&self, user: User) -> Result<bool, UserError> {
        let result = sqlx::query(
            "INSERT INTO users (username, first_name, last_name, password, email, role) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password)
        .bind(&user.email)
        .bind(&user.role)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(false),
            Err(err) => Err(internal(err)),
        }
    }

    async fn put(&self, user: User) -> Result<(), UserError> {
        sqlx::query(
            "INSERT INTO users (username, first_name, last_name, password, email, role) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON DUPLICATE KEY UPDATE \
                 first_name = VALUES(first_name), \
                 last_name = VALUES(last_name), \
                 password = VALUES(password), \
                 email = VALUES(email), \
                 role = VALUES(role)",
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password)
        .bind(&user.email)
        .bind(&user.role)
        .execute(&self.pool)
        .await
        .map_err(internal)?;
        Ok(())
    }

    async fn update(
        &self,
        username: &str,
        apply: Box<dyn FnOnce(&mut User) + Send>,
    ) -> Result<bool, UserError> {
        let mut tx = self.pool.begin().await.map_err(internal)?;

        // FOR UPDATE keeps the row locked until commit, so a concurrent
        // update of the same user waits instead of working from stale data.
        let row = sqlx::query_as::<_, User>(
            "SELECT username, first_name, last_name, password, email, role \
             FROM users WHERE username = ? FOR UPDATE",
        )
        .bind(username)
        .fetch_optional(&mut *tx)
        .await
        .map_err(internal)?;

        let Some(mut user) = row else {
            return Ok(false);
        };
        apply(&mut user);

        sqlx::query(
            "UPDATE users SET first_name = ?, last_name = ?, password = ?, email = ?, role = ? \
             WHERE username = ?",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password)
        .bind(&user.email)
        .bind(&user.role)
        .bind(username)
        .execute(&mut *tx)
        .await
        .map_err(internal)?;

        tx.commit().await.map_err(internal)?;
        Ok(true)
    }

    async fn delete(&self, username: &str) -> Result<bool, UserError> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(internal)?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, username: &str) -> Result<bool, UserError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(internal)?;
        Ok(row.is_some())
    }
}
