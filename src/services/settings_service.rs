use anyhow::Result;
use sqlx::PgPool;

use crate::models::{
    DistanceUnit, UpdateDailyGoalsRequest, UpdateMeasurementsRequest, UpdateSettingsRequest,
    UserSettings, WeightUnit,
};

const SETTINGS_COLUMNS: &str =
    "id, user_id, weight_unit, distance_unit, daily_sets_goal, daily_calories_goal, created_at, updated_at";

#[derive(Clone)]
pub struct SettingsService {
    db: PgPool,
}

impl SettingsService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch the user's settings, creating the default row on first access
    pub async fn get_or_create(&self, user_id: &str) -> Result<UserSettings> {
        let existing = sqlx::query_as::<_, UserSettings>(&format!(
            "SELECT {} FROM user_settings WHERE user_id = $1",
            SETTINGS_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        if let Some(settings) = existing {
            return Ok(settings);
        }

        // Two first requests can race; the conflict clause turns the loser
        // into a no-op update so RETURNING still yields the surviving row.
        let settings = sqlx::query_as::<_, UserSettings>(&format!(
            "INSERT INTO user_settings (user_id) VALUES ($1)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING {}",
            SETTINGS_COLUMNS
        ))
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(settings)
    }

    /// Update measurement units. Returns `None` when no settings row exists.
    pub async fn update_measurements(
        &self,
        user_id: &str,
        request: &UpdateMeasurementsRequest,
    ) -> Result<Option<UserSettings>> {
        let weight_unit = request.weight_unit.as_deref().and_then(WeightUnit::from_str);
        let distance_unit = request
            .distance_unit
            .as_deref()
            .and_then(DistanceUnit::from_str);

        let settings = sqlx::query_as::<_, UserSettings>(&format!(
            "UPDATE user_settings
             SET weight_unit = COALESCE($2, weight_unit),
                 distance_unit = COALESCE($3, distance_unit),
                 updated_at = NOW()
             WHERE user_id = $1
             RETURNING {}",
            SETTINGS_COLUMNS
        ))
        .bind(user_id)
        .bind(weight_unit)
        .bind(distance_unit)
        .fetch_optional(&self.db)
        .await?;

        Ok(settings)
    }

    /// Update daily goals. Returns `None` when no settings row exists.
    pub async fn update_daily_goals(
        &self,
        user_id: &str,
        request: &UpdateDailyGoalsRequest,
    ) -> Result<Option<UserSettings>> {
        let settings = sqlx::query_as::<_, UserSettings>(&format!(
            "UPDATE user_settings
             SET daily_sets_goal = COALESCE($2, daily_sets_goal),
                 daily_calories_goal = COALESCE($3, daily_calories_goal),
                 updated_at = NOW()
             WHERE user_id = $1
             RETURNING {}",
            SETTINGS_COLUMNS
        ))
        .bind(user_id)
        .bind(request.daily_sets_goal)
        .bind(request.daily_calories_goal)
        .fetch_optional(&self.db)
        .await?;

        Ok(settings)
    }

    /// Apply a combined measurements and goals update in one statement
    pub async fn update_settings(
        &self,
        user_id: &str,
        request: &UpdateSettingsRequest,
    ) -> Result<Option<UserSettings>> {
        let weight_unit = request
            .measurements
            .as_ref()
            .and_then(|m| m.weight_unit.as_deref())
            .and_then(WeightUnit::from_str);
        let distance_unit = request
            .measurements
            .as_ref()
            .and_then(|m| m.distance_unit.as_deref())
            .and_then(DistanceUnit::from_str);
        let daily_sets_goal = request.daily_goals.as_ref().and_then(|g| g.daily_sets_goal);
        let daily_calories_goal = request
            .daily_goals
            .as_ref()
            .and_then(|g| g.daily_calories_goal);

        let settings = sqlx::query_as::<_, UserSettings>(&format!(
            "UPDATE user_settings
             SET weight_unit = COALESCE($2, weight_unit),
                 distance_unit = COALESCE($3, distance_unit),
                 daily_sets_goal = COALESCE($4, daily_sets_goal),
                 daily_calories_goal = COALESCE($5, daily_calories_goal),
                 updated_at = NOW()
             WHERE user_id = $1
             RETURNING {}",
            SETTINGS_COLUMNS
        ))
        .bind(user_id)
        .bind(weight_unit)
        .bind(distance_unit)
        .bind(daily_sets_goal)
        .bind(daily_calories_goal)
        .fetch_optional(&self.db)
        .await?;

        Ok(settings)
    }
}
