use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog exercise. `exercise_type` is the numeric discriminant the mobile
/// clients send back inside logged sessions (1 = strength, 2 = bodyweight,
/// 3 = cardio).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub catalog_id: String,
    pub name: String,
    pub equipment: Option<String>,
    pub bodypart: Option<String>,
    pub target: Option<String>,
    pub secondary: Vec<String>,
    pub gifurl: Option<String>,
    pub img: Option<String>,
    pub exercise_type: Option<i32>,
}

/// Projection attached to sessions when an exercise reference is resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMeta {
    pub id: Uuid,
    pub name: String,
    pub target: Option<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    pub img: Option<String>,
    pub exercise_type: Option<i32>,
}

/// One page of catalog results
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePage {
    pub data: Vec<Exercise>,
    pub page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}
