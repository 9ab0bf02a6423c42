//! Client tests against a served in-memory instance.

use std::sync::Arc;

use server::error::UserError;
use server::models::user::User;
use server::store::MemoryStore;
use user_service_cli::{ClientError, UserClient};

async fn spawn_server() -> String {
    let app = server::app(Arc::new(MemoryStore::new()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn alice() -> User {
    User {
        first_name: "Alice".to_string(),
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        ..User::default()
    }
}

#[tokio::test]
async fn round_trip_over_the_wire() {
    let client = UserClient::new(&spawn_server().await).unwrap();

    client.post_user(&alice()).await.unwrap();
    assert_eq!(client.get_user("alice").await.unwrap(), alice());

    client.delete_user("alice").await.unwrap();
    match client.get_user("alice").await {
        Err(ClientError::Api(UserError::NotFound)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[tokio::test]
async fn business_errors_come_back_typed() {
    let client = UserClient::new(&spawn_server().await).unwrap();

    client.post_user(&alice()).await.unwrap();
    match client.post_user(&alice()).await {
        Err(ClientError::Api(UserError::AlreadyExists)) => {}
        other => panic!("expected already-exists, got {other:?}"),
    }

    let mismatched = User {
        username: "bob".to_string(),
        ..User::default()
    };
    match client.put_user("alice", &mismatched).await {
        Err(ClientError::Api(UserError::InconsistentIds)) => {}
        other => panic!("expected inconsistent-ids, got {other:?}"),
    }
}

#[tokio::test]
async fn patch_merges_through_the_client() {
    let client = UserClient::new(&spawn_server().await).unwrap();

    client.post_user(&alice()).await.unwrap();

    let update = User {
        email: "new@x.com".to_string(),
        ..User::default()
    };
    client.patch_user("alice", &update).await.unwrap();

    let merged = client.get_user("alice").await.unwrap();
    assert_eq!(merged.email, "new@x.com");
    assert_eq!(merged.first_name, "Alice");
}

#[tokio::test]
async fn transport_failures_are_not_api_errors() {
    // Nothing listens here.
    let client = UserClient::new("http://127.0.0.1:1").unwrap();
    match client.get_user("alice").await {
        Err(ClientError::Http(_)) => {}
        other => panic!("expected a transport error, got {other:?}"),
    }
}
