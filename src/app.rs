use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/suggest", post(handlers::suggest))
        .route(
            "/api/records",
            get(handlers::list_records).post(handlers::save_record),
        )
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        // completion records embed whole photos as data URIs
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .with_state(state)
}
