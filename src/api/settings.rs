use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{
    UpdateDailyGoalsRequest, UpdateMeasurementsRequest, UpdateSettingsRequest,
    UserSettingsResponse,
};
use crate::services::SettingsService;
use crate::AppState;

pub fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings).put(update_settings))
        .route("/measurements", put(update_measurements))
        .route("/daily-goals", put(update_daily_goals))
}

fn settings_body(settings: UserSettingsResponse) -> Json<Value> {
    Json(json!({ "success": true, "data": settings }))
}

/// The caller's settings, created with defaults on first access
pub async fn get_settings(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let settings = SettingsService::new(state.db.clone())
        .get_or_create(&user.user_id)
        .await?;
    Ok(settings_body(settings.into()))
}

/// Update weight and distance units
pub async fn update_measurements(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<UpdateMeasurementsRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    request
        .validate()
        .map_err(|message| AppError::BadRequest(message.to_string()))?;

    let settings = SettingsService::new(state.db.clone())
        .update_measurements(&user.user_id, &request)
        .await?
        .ok_or_else(|| AppError::NotFound("User settings not found".to_string()))?;
    Ok(settings_body(settings.into()))
}

/// Update daily set and calorie goals
pub async fn update_daily_goals(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<UpdateDailyGoalsRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    request
        .validate()
        .map_err(|message| AppError::BadRequest(message.to_string()))?;

    let settings = SettingsService::new(state.db.clone())
        .update_daily_goals(&user.user_id, &request)
        .await?
        .ok_or_else(|| AppError::NotFound("User settings not found".to_string()))?;
    Ok(settings_body(settings.into()))
}

/// Update measurements and goals in one request
pub async fn update_settings(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<UpdateSettingsRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    request
        .validate()
        .map_err(|message| AppError::BadRequest(message.to_string()))?;

    let settings = SettingsService::new(state.db.clone())
        .update_settings(&user.user_id, &request)
        .await?
        .ok_or_else(|| AppError::NotFound("User settings not found".to_string()))?;
    Ok(settings_body(settings.into()))
}
