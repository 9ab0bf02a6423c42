//! Uniform request/response adapters between the transport and the service.
//!
//! Each adapter takes the typed request value for one operation, calls the
//! service, and hands the result back untouched: business errors pass
//! through as-is so the transport (or a remote caller) can tell them apart
//! from decode and network failures. The types here are also the wire
//! contract reused by the client stub in `user_service_cli`.

use serde::{Deserialize, Serialize};

use crate::error::UserError;
use crate::models::user::User;
use crate::service::UserService;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostUserRequest {
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetUserRequest {
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PutUserRequest {
    pub username: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatchUserRequest {
    pub username: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub username: String,
}

/// Success payload of the four mutating operations: an empty JSON object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: User,
}

/// All endpoint adapters over one service instance.
#[derive(Clone)]
pub struct Endpoints {
    service: UserService,
}

impl Endpoints {
    pub fn new(service: UserService) -> Self {
        Self { service }
    }

    pub async fn post_user(&self, req: PostUserRequest) -> Result<EmptyResponse, UserError> {
        self.service.post_user(req.user).await?;
        Ok(EmptyResponse {})
    }

    pub async fn get_user(&self, req: GetUserRequest) -> Result<GetUserResponse, UserError> {
        let user = self.service.get_user(&req.username).await?;
        Ok(GetUserResponse { user })
    }

    pub async fn put_user(&self, req: PutUserRequest) -> Result<EmptyResponse, UserError> {
        self.service.put_user(&req.username, req.user).await?;
        Ok(EmptyResponse {})
    }

    pub async fn patch_user(&self, req: PatchUserRequest) -> Result<EmptyResponse, UserError> {
        self.service.patch_user(&req.username, req.user).await?;
        Ok(EmptyResponse {})
    }

    pub async fn delete_user(&self, req: DeleteUserRequest) -> Result<EmptyResponse, UserError> {
        self.service.delete_user(&req.username).await?;
        Ok(EmptyResponse {})
    }
}
