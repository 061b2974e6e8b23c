use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{CreateWorkoutRequest, WorkoutSessionResponse};
use crate::services::WorkoutService;
use crate::AppState;

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_workouts).post(create_workout))
        .route("/:id", put(update_workout).delete(delete_workout))
}

/// Record a finished workout session
pub async fn create_workout(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutRequest>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if request.exercises.is_empty() {
        return Err(AppError::BadRequest(
            "Workout must include at least one exercise".to_string(),
        ));
    }

    let session = WorkoutService::new(state.db.clone())
        .create_session(&user.user_id, request)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": session })),
    ))
}

/// The caller's full session history, newest first, with catalog references
/// resolved
pub async fn get_workouts(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let sessions = WorkoutService::new(state.db.clone())
        .get_sessions(&user.user_id)
        .await?;
    let data: Vec<WorkoutSessionResponse> =
        sessions.iter().map(WorkoutSessionResponse::from_session).collect();
    Ok(Json(json!({ "status": "success", "data": data })))
}

/// Replace a session's contents
pub async fn update_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    if request.exercises.is_empty() {
        return Err(AppError::BadRequest(
            "Workout must include at least one exercise".to_string(),
        ));
    }

    let session = WorkoutService::new(state.db.clone())
        .update_session(id, &user.user_id, request)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;
    Ok(Json(json!({ "status": "success", "data": session })))
}

/// Delete a session the caller owns
pub async fn delete_workout(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = WorkoutService::new(state.db.clone())
        .delete_session(id, &user.user_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }

    Ok(Json(json!({ "status": "success", "message": "Workout deleted" })))
}
