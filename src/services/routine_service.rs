use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{CreateRoutineRequest, Routine, RoutineExercise};

#[derive(FromRow)]
struct RoutineRow {
    id: Uuid,
    name: String,
    exercises: Json<Vec<RoutineExercise>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoutineRow> for Routine {
    fn from(row: RoutineRow) -> Self {
        Routine {
            id: row.id,
            name: row.name,
            exercises: row.exercises.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct RoutineService {
    db: PgPool,
}

impl RoutineService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn create_routine(
        &self,
        user_id: &str,
        request: &CreateRoutineRequest,
    ) -> Result<Routine> {
        let row = sqlx::query_as::<_, RoutineRow>(
            r#"
            INSERT INTO routines (user_id, name, exercises)
            VALUES ($1, $2, $3)
            RETURNING id, name, exercises, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(Json(&request.exercises))
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Caller's routines, newest first
    pub async fn get_routines(&self, user_id: &str) -> Result<Vec<Routine>> {
        let rows = sqlx::query_as::<_, RoutineRow>(
            r#"
            SELECT id, name, exercises, created_at, updated_at
            FROM routines
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Ownership-checked update; `None` when the routine does not exist or
    /// belongs to someone else
    pub async fn update_routine(
        &self,
        routine_id: Uuid,
        user_id: &str,
        request: &CreateRoutineRequest,
    ) -> Result<Option<Routine>> {
        let row = sqlx::query_as::<_, RoutineRow>(
            r#"
            UPDATE routines
            SET name = $3, exercises = $4, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, exercises, created_at, updated_at
            "#,
        )
        .bind(routine_id)
        .bind(user_id)
        .bind(&request.name)
        .bind(Json(&request.exercises))
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Ownership-checked delete; `false` when nothing was removed
    pub async fn delete_routine(&self, routine_id: Uuid, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM routines WHERE id = $1 AND user_id = $2")
            .bind(routine_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
