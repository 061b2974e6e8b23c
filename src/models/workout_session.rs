use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::exercise::ExerciseMeta;
use crate::models::routine::RoutineSummary;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    Warmup,
    Normal,
    Dropset,
    Failure,
}

/// One logged set. Every metric is optional: strength sets carry reps/weight,
/// cardio sets carry time/distance, and rows written by older clients may
/// omit `done` entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionSet {
    #[serde(default)]
    pub reps: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub rest: Option<i32>,
    #[serde(default, alias = "type")]
    pub set_type: Option<SetType>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Exercise reference inside a session: either the raw catalog id or the
/// resolved projection, depending on whether resolution ran. Serialized as a
/// plain uuid string or an object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExerciseRef {
    Resolved(ExerciseMeta),
    Id(Uuid),
}

impl ExerciseRef {
    pub fn id(&self) -> Uuid {
        match self {
            ExerciseRef::Resolved(meta) => meta.id,
            ExerciseRef::Id(id) => *id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ExerciseRef::Resolved(_))
    }
}

/// Routine reference on a session, same shape as [`ExerciseRef`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RoutineRef {
    Resolved(RoutineSummary),
    Id(Uuid),
}

impl RoutineRef {
    pub fn id(&self) -> Uuid {
        match self {
            RoutineRef::Resolved(summary) => summary.id,
            RoutineRef::Id(id) => *id,
        }
    }
}

/// Exercise entry inside a logged session. `exercise_type` is denormalized
/// from the catalog at write time so aggregation never joins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    pub exercise_id: ExerciseRef,
    #[serde(default, alias = "exercise_type")]
    pub exercise_type: i32,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub sets: Vec<SessionSet>,
}

/// A logged workout session, scoped to one user at the query layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<RoutineRef>,
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub total_duration_seconds: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Session projection returned by the history listing and the dashboard:
/// a resolved routine reference is lifted into `routine` and the raw
/// `routineId` key is dropped.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSessionResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine: Option<RoutineSummary>,
    pub exercises: Vec<SessionExercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_seconds: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutSessionResponse {
    pub fn from_session(session: &WorkoutSession) -> Self {
        let routine = match &session.routine_id {
            Some(RoutineRef::Resolved(summary)) => Some(summary.clone()),
            _ => None,
        };
        Self {
            id: session.id,
            routine,
            exercises: session.exercises.clone(),
            calories: session.calories,
            total_duration_seconds: session.total_duration_seconds,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    #[serde(default)]
    pub routine_id: Option<String>,
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default, alias = "duration", alias = "totalDuration")]
    pub total_duration_seconds: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_ref_deserializes_from_id_string() {
        let raw = r#""5f0c2a3b-4d5e-4f60-8a9b-0c1d2e3f4a5b""#;
        let reference: ExerciseRef = serde_json::from_str(raw).unwrap();
        assert!(!reference.is_resolved());
        assert_eq!(
            reference.id(),
            "5f0c2a3b-4d5e-4f60-8a9b-0c1d2e3f4a5b".parse::<Uuid>().unwrap()
        );
    }

    #[test]
    fn exercise_ref_deserializes_from_resolved_object() {
        let raw = r#"{
            "id": "5f0c2a3b-4d5e-4f60-8a9b-0c1d2e3f4a5b",
            "name": "Bench Press",
            "target": "pectorals",
            "secondary": ["triceps"],
            "img": null,
            "exerciseType": 1
        }"#;
        let reference: ExerciseRef = serde_json::from_str(raw).unwrap();
        assert!(reference.is_resolved());
        match reference {
            ExerciseRef::Resolved(meta) => {
                assert_eq!(meta.name, "Bench Press");
                assert_eq!(meta.exercise_type, Some(1));
            }
            ExerciseRef::Id(_) => panic!("expected resolved reference"),
        }
    }

    #[test]
    fn session_serializes_with_camel_case_keys() {
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            routine_id: None,
            exercises: vec![],
            calories: Some(250.0),
            total_duration_seconds: Some(1800.0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("totalDurationSeconds").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("routineId").is_none());
    }

    #[test]
    fn response_lifts_resolved_routine_and_drops_raw_id() {
        let routine = RoutineSummary {
            id: Uuid::new_v4(),
            name: "Push Day".to_string(),
            exercises: vec![],
        };
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            routine_id: Some(RoutineRef::Resolved(routine.clone())),
            exercises: vec![],
            calories: None,
            total_duration_seconds: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = WorkoutSessionResponse::from_session(&session);
        assert_eq!(response.routine.as_ref().map(|r| r.id), Some(routine.id));

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("routine").is_some());
        assert!(value.get("routineId").is_none());
    }

    #[test]
    fn unresolved_routine_is_omitted_from_response() {
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            routine_id: Some(RoutineRef::Id(Uuid::new_v4())),
            exercises: vec![],
            calories: None,
            total_duration_seconds: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let response = WorkoutSessionResponse::from_session(&session);
        assert!(response.routine.is_none());
    }

    #[test]
    fn set_tolerates_missing_fields() {
        let set: SessionSet = serde_json::from_str(r#"{"reps": 5}"#).unwrap();
        assert_eq!(set.reps, Some(5));
        assert_eq!(set.done, None);
        assert_eq!(set.set_type, None);
    }
}
