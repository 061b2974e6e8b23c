use serde::Serialize;

use crate::models::workout_session::WorkoutSessionResponse;

/// Aggregated view of one user's workout history. Derived on demand, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_workouts: i64,
    pub total_volume: f64,
    pub total_weight: f64,
    pub total_sets: i64,
    pub total_reps: i64,
    pub total_cardio_minutes: f64,
    pub total_cardio_distance: f64,
    pub total_calories_burned: f64,
    pub today_calories: f64,
    pub today_sets: i64,
    pub weekly_workouts: i64,
    pub weekly_volume: f64,
    pub daily_data: Vec<DailyActivity>,
    pub recent_workouts: Vec<WorkoutSessionResponse>,
}

/// One slot of the Monday-first weekly activity chart. `value` is the guarded
/// volume compressed to chart scale (volume / 100, rounded).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyActivity {
    pub day: String,
    pub value: i64,
    pub workouts: i64,
    pub volume: f64,
}
