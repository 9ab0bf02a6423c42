use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::endpoints::Endpoints;
use crate::handlers::user_handlers::{delete_user, get_user, patch_user, post_user, put_user};

// POST    /users                adds another user
// GET     /users/{username}     retrieves the given user
// PUT     /users/{username}     replaces (or creates) the user
// PATCH   /users/{username}     partially updates the user
// DELETE  /users/{username}     removes the given user
pub fn user_routes(endpoints: Endpoints) -> Router {
    Router::new()
        .route("/users", post(post_user))
        .route("/users/{username}", get(get_user))
        .route("/users/{username}", put(put_user))
        .route("/users/{username}", patch(patch_user))
        .route("/users/{username}", delete(delete_user))
        .with_state(endpoints)
}
