pub mod db;
pub mod endpoints;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use endpoints::Endpoints;
use routes::users::user_routes;
use service::UserService;
use store::UserStore;

/// Builds the application router over the given store.
///
/// Everything this service returns is JSON, so the content type is pinned
/// once here instead of per handler.
pub fn app(store: Arc<dyn UserStore>) -> Router {
    let endpoints = Endpoints::new(UserService::new(store));

    Router::new()
        .merge(user_routes(endpoints))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ))
        .layer(TraceLayer::new_for_http())
}
