use axum::{routing::get, Router};

use super::dashboard::dashboard_routes;
use super::exercises::exercise_routes;
use super::health::health_check;
use super::routines::routine_routes;
use super::settings::settings_routes;
use super::users::user_routes;
use super::workouts::workout_routes;
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/user", user_routes())
        .nest("/api/exercises", exercise_routes())
        .nest("/api/routines", routine_routes())
        .nest("/api/workout", workout_routes())
        .nest("/api/dashboard", dashboard_routes())
        .nest("/api/settings", settings_routes())
        .with_state(state)
}
