use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a service operation can produce. The display strings are part of
/// the wire contract: clients match on them to recover the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("not found")]
    NotFound,

    #[error("already exists")]
    AlreadyExists,

    #[error("inconsistent IDs")]
    InconsistentIds,

    /// Catch-all for everything that is not a business error, such as a
    /// storage backend failure or an undecodable request.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::AlreadyExists | UserError::InconsistentIds => StatusCode::BAD_REQUEST,
            UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
