use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits/:id/toggle", post(handlers::habit_form))
        .route("/days/:day/toggle", post(handlers::day_form))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/habits/toggle", post(handlers::toggle_habit))
        .route("/api/days/toggle", post(handlers::toggle_day))
        .with_state(state)
}
