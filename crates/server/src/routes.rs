pub mod members;
pub mod workout_sessions;

use axum::{http::Uri, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;
use crate::state::ServerState;

pub const WELCOME: &str = "Welcome to the Fitness Center Management System";

pub async fn home() -> &'static str {
    WELCOME
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn no_route(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Build the full application router. Every (method, path) pair the service
/// answers is listed here.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/members", get(members::list).post(members::create))
        .route(
            "/members/:id",
            get(members::get).put(members::update).delete(members::delete),
        )
        .route(
            "/workoutsessions",
            get(workout_sessions::list).post(workout_sessions::create),
        )
        .route(
            "/workoutsessions/:id",
            get(workout_sessions::list_for_member)
                .put(workout_sessions::update)
                .delete(workout_sessions::delete),
        )
        .fallback(no_route)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
