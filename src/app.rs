use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/profile", put(handlers::put_profile))
        .route(
            "/api/auth/token",
            post(handlers::store_token).delete(handlers::logout),
        )
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/history", post(handlers::save_history))
        .route("/api/history/sync", post(handlers::sync_history))
        .route(
            "/api/history/:index",
            get(handlers::view_history).delete(handlers::delete_history),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
