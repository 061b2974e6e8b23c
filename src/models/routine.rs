use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::workout_session::SetType;

fn default_set_type() -> SetType {
    SetType::Normal
}

fn default_rest() -> i32 {
    60
}

/// Planned set inside a routine. The builder UI and the storage format
/// historically used different field names, so the target-prefixed spellings
/// are accepted as aliases on input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineSet {
    #[serde(default, alias = "targetReps")]
    pub reps: Option<i32>,
    #[serde(default, alias = "targetWeight")]
    pub weight: Option<f64>,
    #[serde(default, alias = "targetDuration")]
    pub time: Option<f64>,
    #[serde(default, alias = "targetDistance")]
    pub distance: Option<f64>,
    #[serde(default = "default_set_type", alias = "type")]
    pub set_type: SetType,
    #[serde(default = "default_rest", alias = "restSeconds")]
    pub rest: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercise {
    #[serde(default)]
    pub exercise_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub gif: Option<String>,
    #[serde(default, alias = "exercise_type")]
    pub exercise_type: i32,
    #[serde(default)]
    pub sets: Vec<RoutineSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<RoutineExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection attached to sessions when a routine reference is resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineRequest {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}
