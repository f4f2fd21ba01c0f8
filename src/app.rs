use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/checkin", post(handlers::check_in_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/checkin", post(handlers::check_in))
        .route("/api/reset", post(handlers::reset))
        .route("/api/today", get(handlers::get_today))
        .route("/api/week", get(handlers::get_week))
        .route("/api/days-between", get(handlers::days_between))
        .with_state(state)
}
