use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub schedule: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthMetric {
    pub id: &'static str,
    pub title: &'static str,
    pub target: &'static str,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub title: &'static str,
    pub meta: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: i64,
    pub marker: &'static str,
    pub productive: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleHabitRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleDayRequest {
    pub day: i64,
}

#[derive(Debug, Serialize)]
pub struct ToggleHabitResponse {
    pub id: String,
    pub known: bool,
    pub completed: Option<bool>,
    pub completion_rate: u8,
    pub habits: Vec<Habit>,
}

#[derive(Debug, Serialize)]
pub struct ToggleDayResponse {
    pub day: i64,
    pub productive: bool,
    pub productive_days: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub habits: Vec<Habit>,
    pub completion_rate: u8,
    pub productive_days: Vec<i64>,
    pub calendar: Vec<CalendarCell>,
    pub health_metrics: Vec<HealthMetric>,
    pub goals: Vec<Goal>,
}
