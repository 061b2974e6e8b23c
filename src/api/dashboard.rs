use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::services::DashboardService;
use crate::AppState;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard-stats", get(get_dashboard_stats))
}

/// Aggregated statistics for the caller's dashboard
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let stats = DashboardService::new(state.db.clone())
        .get_dashboard_stats(&user.user_id)
        .await?;
    Ok(Json(json!({ "status": "success", "data": stats })))
}
