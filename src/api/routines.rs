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
use crate::models::{CreateRoutineRequest, Routine};
use crate::services::RoutineService;
use crate::AppState;

pub fn routine_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_routines).post(create_routine))
        .route("/:id", put(update_routine).delete(delete_routine))
}

/// Create a routine owned by the caller
pub async fn create_routine(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<CreateRoutineRequest>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("Routine name is required".to_string()));
    }

    RoutineService::new(state.db.clone())
        .create_routine(&user.user_id, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "status": "success" }))))
}

/// All of the caller's routines, newest first
pub async fn get_routines(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Routine>>, AppError> {
    let routines = RoutineService::new(state.db.clone())
        .get_routines(&user.user_id)
        .await?;
    Ok(Json(routines))
}

/// Replace a routine's name and exercise list
pub async fn update_routine(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(request), _): WithRejection<Json<CreateRoutineRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    let routine = RoutineService::new(state.db.clone())
        .update_routine(id, &user.user_id, &request)
        .await?
        .ok_or_else(|| AppError::NotFound("Routine not found or access denied".to_string()))?;
    Ok(Json(json!({ "status": "success", "data": routine })))
}

/// Delete a routine the caller owns
pub async fn delete_routine(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = RoutineService::new(state.db.clone())
        .delete_routine(id, &user.user_id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound(
            "Routine not found or access denied".to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Routine deleted successfully",
        "routineId": id,
    })))
}
