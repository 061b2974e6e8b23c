use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::ExercisePage;
use crate::services::{CatalogFilter, ExerciseService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListExercisesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchExercisesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub muscle: Option<String>,
    pub equipment: Option<String>,
    pub name: Option<String>,
}

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises))
        .route("/search", get(search_exercises))
}

/// Page through the exercise catalog, optionally narrowed by name
pub async fn list_exercises(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListExercisesQuery>,
) -> Result<Json<ExercisePage>, AppError> {
    let page = ExerciseService::new(state.db.clone())
        .list(query.page, query.limit, query.name.as_deref())
        .await?;
    Ok(Json(page))
}

/// Catalog search filtered by target muscle, equipment and name
pub async fn search_exercises(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<SearchExercisesQuery>,
) -> Result<Json<ExercisePage>, AppError> {
    let filter = CatalogFilter {
        muscle: query.muscle,
        equipment: query.equipment,
        name: query.name,
    };
    let page = ExerciseService::new(state.db.clone())
        .search(&filter, query.page, query.limit)
        .await?;
    Ok(Json(page))
}
