use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::endpoints::{
    DeleteUserRequest, Endpoints, GetUserRequest, PatchUserRequest, PostUserRequest,
    PutUserRequest,
};
use crate::error::UserError;
use crate::models::user::User;

// An undecodable body is not a business error; it lands in the catch-all
// class together with everything else the service never saw.
fn decode_error(rejection: JsonRejection) -> UserError {
    UserError::Internal(format!("bad request body: {rejection}"))
}

// A failing Path extraction means the route table and the handler disagree
// about the path variables. Always a programmer error.
fn routing_error(rejection: PathRejection) -> UserError {
    UserError::Internal(format!("route mismatch: {rejection}"))
}

pub async fn post_user(
    State(endpoints): State<Endpoints>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Json(user) = body.map_err(decode_error)?;
    let resp = endpoints.post_user(PostUserRequest { user }).await?;
    Ok((StatusCode::OK, Json(resp)))
}

pub async fn get_user(
    State(endpoints): State<Endpoints>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Path(username) = path.map_err(routing_error)?;
    let resp = endpoints.get_user(GetUserRequest { username }).await?;
    Ok((StatusCode::OK, Json(resp)))
}

pub async fn put_user(
    State(endpoints): State<Endpoints>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Path(username) = path.map_err(routing_error)?;
    let Json(user) = body.map_err(decode_error)?;
    let resp = endpoints.put_user(PutUserRequest { username, user }).await?;
    Ok((StatusCode::OK, Json(resp)))
}

pub async fn patch_user(
    State(endpoints): State<Endpoints>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Path(username) = path.map_err(routing_error)?;
    let Json(user) = body.map_err(decode_error)?;
    let resp = endpoints
        .patch_user(PatchUserRequest { username, user })
        .await?;
    Ok((StatusCode::OK, Json(resp)))
}

pub async fn delete_user(
    State(endpoints): State<Endpoints>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, UserError> {
    let Path(username) = path.map_err(routing_error)?;
    let resp = endpoints.delete_user(DeleteUserRequest { username }).await?;
    Ok((StatusCode::OK, Json(resp)))
}
