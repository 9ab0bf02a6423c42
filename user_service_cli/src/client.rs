//! HTTP client stub for the user service.
//!
//! Speaks the same request/response shapes as the server's endpoint layer
//! and maps error bodies back onto [`UserError`], so a caller can tell a
//! business error apart from a transport failure.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use server::endpoints::GetUserResponse;
use server::error::UserError;
use server::models::user::User;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered, with a business error.
    #[error("{0}")]
    Api(#[from] UserError),

    /// The request never produced a usable answer.
    #[error("transport: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid service address: {0}")]
    BadAddress(#[from] url::ParseError),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Maps a wire error message back onto the service taxonomy.
fn decode_error(message: &str) -> UserError {
    match message {
        "not found" => UserError::NotFound,
        "already exists" => UserError::AlreadyExists,
        "inconsistent IDs" => UserError::InconsistentIds,
        other => UserError::Internal(other.to_string()),
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    match response.json::<ErrorBody>().await {
        Ok(body) => ClientError::Api(decode_error(&body.error)),
        Err(err) => ClientError::Http(err),
    }
}

async fn expect_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(api_error(response).await)
    }
}

pub struct UserClient {
    http: Client,
    base: Url,
}

impl UserClient {
    /// A bare `host:port` is accepted and assumed to be plain HTTP.
    pub fn new(instance: &str) -> Result<Self, ClientError> {
        let base = if instance.starts_with("http") {
            Url::parse(instance)?
        } else {
            Url::parse(&format!("http://{instance}"))?
        };
        Ok(Self {
            http: Client::new(),
            base,
        })
    }

    fn user_url(&self, username: &str) -> Result<Url, ClientError> {
        let path = format!("/users/{}", urlencoding::encode(username));
        Ok(self.base.join(&path)?)
    }

    pub async fn post_user(&self, user: &User) -> Result<(), ClientError> {
        let url = self.base.join("/users")?;
        let response = self.http.post(url).json(user).send().await?;
        expect_empty(response).await
    }

    pub async fn get_user(&self, username: &str) -> Result<User, ClientError> {
        let response = self.http.get(self.user_url(username)?).send().await?;
        if response.status().is_success() {
            let body: GetUserResponse = response.json().await?;
            Ok(body.user)
        } else {
            Err(api_error(response).await)
        }
    }

    pub async fn put_user(&self, username: &str, user: &User) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.user_url(username)?)
            .json(user)
            .send()
            .await?;
        expect_empty(response).await
    }

    pub async fn patch_user(&self, username: &str, user: &User) -> Result<(), ClientError> {
        let response = self
            .http
            .patch(self.user_url(username)?)
            .json(user)
            .send()
            .await?;
        expect_empty(response).await
    }

    pub async fn delete_user(&self, username: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.user_url(username)?).send().await?;
        expect_empty(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_round_trip_to_variants() {
        assert_eq!(decode_error("not found"), UserError::NotFound);
        assert_eq!(decode_error("already exists"), UserError::AlreadyExists);
        assert_eq!(decode_error("inconsistent IDs"), UserError::InconsistentIds);
        assert_eq!(
            decode_error("database gone"),
            UserError::Internal("database gone".to_string())
        );
    }

    #[test]
    fn bare_addresses_get_an_http_scheme() {
        let client = UserClient::new("127.0.0.1:8080").unwrap();
        assert_eq!(client.base.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn usernames_are_escaped_in_paths() {
        let client = UserClient::new("http://127.0.0.1:8080").unwrap();
        let url = client.user_url("a b/c").unwrap();
        assert_eq!(url.path(), "/users/a%20b%2Fc");
    }
}
