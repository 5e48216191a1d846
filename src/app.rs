use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::today_page))
        .route("/day", get(handlers::day_page))
        .route("/api/today", get(handlers::api_today))
        .route("/api/day", get(handlers::api_day))
        .with_state(state)
}
