use std::env;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use server::db;
use server::store::{MemoryStore, MySqlStore, UserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listen_addr =
        env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // DATABASE_URL picks the MySQL store; without it users live in memory
    // for the lifetime of the process.
    let store: Arc<dyn UserStore> = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = db::init_db(&database_url).await?;
            info!("store: mysql");
            Arc::new(MySqlStore::new(pool).await?)
        }
        Err(_) => {
            info!("store: in-memory");
            Arc::new(MemoryStore::new())
        }
    };

    let mut app = server::app(store);

    if let Ok(client_url) = env::var("CLIENT_URL") {
        let cors = CorsLayer::new()
            .allow_origin(client_url.parse::<HeaderValue>()?)
            .allow_methods([
                Method::POST,
                Method::GET,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(cors);
    }

    let listener = TcpListener::bind(&listen_addr).await?;
    info!(addr = %listen_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
