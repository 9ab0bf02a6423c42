use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
