use std::collections::{HashMap, HashSet};

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{
    CreateWorkoutRequest, ExerciseMeta, ExerciseRef, RoutineExercise, RoutineRef, RoutineSummary,
    SessionExercise, WorkoutSession,
};

#[derive(FromRow)]
struct WorkoutSessionRow {
    id: Uuid,
    routine_id: Option<Uuid>,
    exercises: Json<Vec<SessionExercise>>,
    calories: Option<f64>,
    total_duration_seconds: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WorkoutSessionRow> for WorkoutSession {
    fn from(row: WorkoutSessionRow) -> Self {
        WorkoutSession {
            id: row.id,
            routine_id: row.routine_id.map(RoutineRef::Id),
            exercises: row.exercises.0,
            calories: row.calories,
            total_duration_seconds: row.total_duration_seconds,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct RoutineSummaryRow {
    id: Uuid,
    name: String,
    exercises: Json<Vec<RoutineExercise>>,
}

#[derive(Clone)]
pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Persist a new session. Routine references that do not parse or do not
    /// point at an existing routine are stored as null rather than rejected.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_session(
        &self,
        user_id: &str,
        request: CreateWorkoutRequest,
    ) -> Result<WorkoutSession> {
        let routine_id = request
            .routine_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok());
        let exercises = normalize_exercises(request.exercises);

        let row = sqlx::query_as::<_, WorkoutSessionRow>(
            r#"
            INSERT INTO workout_sessions (user_id, routine_id, exercises, calories, total_duration_seconds)
            VALUES ($1, (SELECT id FROM routines WHERE id = $2), $3, $4, $5)
            RETURNING id, routine_id, exercises, calories, total_duration_seconds, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(routine_id)
        .bind(Json(&exercises))
        .bind(request.calories)
        .bind(request.total_duration_seconds)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Full history for one user, newest first, references resolved
    #[tracing::instrument(skip(self))]
    pub async fn get_sessions(&self, user_id: &str) -> Result<Vec<WorkoutSession>> {
        let rows = sqlx::query_as::<_, WorkoutSessionRow>(
            r#"
            SELECT id, routine_id, exercises, calories, total_duration_seconds, created_at, updated_at
            FROM workout_sessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        let mut sessions: Vec<WorkoutSession> = rows.into_iter().map(Into::into).collect();
        self.resolve_references(&mut sessions).await?;
        Ok(sessions)
    }

    /// Ownership-checked full replacement; `None` when the session does not
    /// exist or belongs to someone else
    pub async fn update_session(
        &self,
        session_id: Uuid,
        user_id: &str,
        request: CreateWorkoutRequest,
    ) -> Result<Option<WorkoutSession>> {
        let routine_id = request
            .routine_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok());
        let exercises = normalize_exercises(request.exercises);

        let row = sqlx::query_as::<_, WorkoutSessionRow>(
            r#"
            UPDATE workout_sessions
            SET routine_id = (SELECT id FROM routines WHERE id = $3),
                exercises = $4, calories = $5, total_duration_seconds = $6,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, routine_id, exercises, calories, total_duration_seconds, created_at, updated_at
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .bind(routine_id)
        .bind(Json(&exercises))
        .bind(request.calories)
        .bind(request.total_duration_seconds)
        .fetch_optional(&self.db)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut sessions = vec![row.into()];
        self.resolve_references(&mut sessions).await?;
        Ok(sessions.pop())
    }

    /// Ownership-checked delete; `false` when nothing was removed
    pub async fn delete_session(&self, session_id: Uuid, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE id = $1 AND user_id = $2")
            .bind(session_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Best-effort resolution of exercise and routine references. References
    /// whose target no longer exists stay raw.
    async fn resolve_references(&self, sessions: &mut [WorkoutSession]) -> Result<()> {
        let mut exercise_ids: HashSet<Uuid> = HashSet::new();
        let mut routine_ids: HashSet<Uuid> = HashSet::new();
        for session in sessions.iter() {
            for exercise in &session.exercises {
                if let ExerciseRef::Id(id) = &exercise.exercise_id {
                    exercise_ids.insert(*id);
                }
            }
            if let Some(RoutineRef::Id(id)) = &session.routine_id {
                routine_ids.insert(*id);
            }
        }

        let exercise_metas = self.load_exercise_metas(&exercise_ids).await?;
        let routine_summaries = self.load_routine_summaries(&routine_ids).await?;

        for session in sessions.iter_mut() {
            for exercise in &mut session.exercises {
                if let ExerciseRef::Id(id) = &exercise.exercise_id {
                    if let Some(meta) = exercise_metas.get(id) {
                        exercise.exercise_id = ExerciseRef::Resolved(meta.clone());
                    }
                }
            }
            if let Some(RoutineRef::Id(id)) = &session.routine_id {
                if let Some(summary) = routine_summaries.get(id) {
                    session.routine_id = Some(RoutineRef::Resolved(summary.clone()));
                }
            }
        }

        Ok(())
    }

    async fn load_exercise_metas(
        &self,
        ids: &HashSet<Uuid>,
    ) -> Result<HashMap<Uuid, ExerciseMeta>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<Uuid> = ids.iter().copied().collect();

        let metas = sqlx::query_as::<_, ExerciseMeta>(
            r#"
            SELECT id, name, target, secondary, img, exercise_type
            FROM exercises
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.db)
        .await?;

        Ok(metas.into_iter().map(|meta| (meta.id, meta)).collect())
    }

    async fn load_routine_summaries(
        &self,
        ids: &HashSet<Uuid>,
    ) -> Result<HashMap<Uuid, RoutineSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let ids: Vec<Uuid> = ids.iter().copied().collect();

        let rows = sqlx::query_as::<_, RoutineSummaryRow>(
            "SELECT id, name, exercises FROM routines WHERE id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.id,
                    RoutineSummary {
                        id: row.id,
                        name: row.name,
                        exercises: row.exercises.0,
                    },
                )
            })
            .collect())
    }
}

/// Write-time normalization: references collapse to raw ids and `done` is
/// always materialized. An absent flag means the client never marked the set,
/// which is stored as not completed.
fn normalize_exercises(exercises: Vec<SessionExercise>) -> Vec<SessionExercise> {
    exercises
        .into_iter()
        .map(|mut exercise| {
            exercise.exercise_id = ExerciseRef::Id(exercise.exercise_id.id());
            for set in &mut exercise.sets {
                set.done = Some(set.done.unwrap_or(false));
            }
            exercise
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionSet;

    #[test]
    fn normalization_materializes_done_flags() {
        let exercises = vec![SessionExercise {
            exercise_id: ExerciseRef::Id(Uuid::new_v4()),
            exercise_type: 1,
            order: 1,
            sets: vec![
                SessionSet {
                    reps: Some(10),
                    done: None,
                    ..SessionSet::default()
                },
                SessionSet {
                    reps: Some(8),
                    done: Some(true),
                    ..SessionSet::default()
                },
            ],
        }];

        let normalized = normalize_exercises(exercises);
        assert_eq!(normalized[0].sets[0].done, Some(false));
        assert_eq!(normalized[0].sets[1].done, Some(true));
    }

    #[test]
    fn normalization_collapses_resolved_references() {
        let id = Uuid::new_v4();
        let exercises = vec![SessionExercise {
            exercise_id: ExerciseRef::Resolved(ExerciseMeta {
                id,
                name: "Squat".to_string(),
                target: None,
                secondary: vec![],
                img: None,
                exercise_type: Some(1),
            }),
            exercise_type: 1,
            order: 1,
            sets: vec![],
        }];

        let normalized = normalize_exercises(exercises);
        assert_eq!(normalized[0].exercise_id, ExerciseRef::Id(id));
    }
}
