use axum::{extract::State, response::Json, routing::post, Router};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::models::{CreateUserRequest, User};
use crate::services::UserService;
use crate::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

/// Upsert the caller's profile from the identity provider payload. This is
/// the one unauthenticated API route; it runs right after sign-in, before
/// the client has attached a token.
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateUserRequest>, AppError>,
) -> Result<Json<User>, AppError> {
    if request.uid.is_empty() {
        return Err(AppError::BadRequest("uid is required".to_string()));
    }

    let user = UserService::new(state.db.clone())
        .upsert_user(&request)
        .await?;
    Ok(Json(user))
}
