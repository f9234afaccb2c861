use crate::errors::AppError;
use crate::models::{
    DashboardResponse, ToggleDayRequest, ToggleDayResponse, ToggleHabitRequest,
    ToggleHabitResponse,
};
use crate::seed;
use crate::state::AppState;
use crate::tracker::Snapshot;
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{Html, Redirect},
    Json,
};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = current_snapshot(&state).await;
    Html(render_index(&snapshot))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let snapshot = current_snapshot(&state).await;
    Json(to_dashboard(&snapshot))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    payload: Result<Json<ToggleHabitRequest>, JsonRejection>,
) -> Result<Json<ToggleHabitResponse>, AppError> {
    let Json(payload) = payload?;
    Ok(Json(apply_habit_toggle(&state, payload.id).await))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    payload: Result<Json<ToggleDayRequest>, JsonRejection>,
) -> Result<Json<ToggleDayResponse>, AppError> {
    let Json(payload) = payload?;
    Ok(Json(apply_day_toggle(&state, payload.day).await))
}

pub async fn habit_form(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    apply_habit_toggle(&state, id).await;
    Redirect::to("/")
}

pub async fn day_form(State(state): State<AppState>, Path(day): Path<i64>) -> Redirect {
    apply_day_toggle(&state, day).await;
    Redirect::to("/")
}

async fn current_snapshot(state: &AppState) -> Snapshot {
    state.tracker.lock().await.snapshot()
}

async fn apply_habit_toggle(state: &AppState, id: String) -> ToggleHabitResponse {
    let (completed, snapshot) = {
        let mut tracker = state.tracker.lock().await;
        let completed = tracker.toggle_habit(&id);
        (completed, tracker.snapshot())
    };

    match completed {
        Some(completed) => info!(habit = %id, completed, "habit toggled"),
        None => debug!(habit = %id, "ignoring toggle for unknown habit"),
    }

    ToggleHabitResponse {
        known: completed.is_some(),
        completed,
        completion_rate: snapshot.completion_rate(),
        habits: snapshot.habits.habits().to_vec(),
        id,
    }
}

async fn apply_day_toggle(state: &AppState, day: i64) -> ToggleDayResponse {
    let (productive, snapshot) = {
        let mut tracker = state.tracker.lock().await;
        let productive = tracker.toggle_day(day);
        (productive, tracker.snapshot())
    };

    info!(day, productive, "day toggled");

    ToggleDayResponse {
        day,
        productive,
        productive_days: snapshot.days.to_vec(),
    }
}

fn to_dashboard(snapshot: &Snapshot) -> DashboardResponse {
    DashboardResponse {
        habits: snapshot.habits.habits().to_vec(),
        completion_rate: snapshot.completion_rate(),
        productive_days: snapshot.days.to_vec(),
        calendar: seed::calendar(&snapshot.days),
        health_metrics: seed::HEALTH_METRICS.to_vec(),
        goals: seed::GOALS.to_vec(),
    }
}
