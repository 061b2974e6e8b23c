use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const MIN_DAILY_SETS: i32 = 1;
pub const MAX_DAILY_SETS: i32 = 100;
pub const MIN_DAILY_CALORIES: i32 = 50;
pub const MAX_DAILY_CALORIES: i32 = 2000;

/// Unit used for set weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kg" => Some(WeightUnit::Kg),
            "lbs" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }
}

/// Unit used for cardio distances
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "miles",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "km" => Some(DistanceUnit::Km),
            "miles" => Some(DistanceUnit::Miles),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: Uuid,
    pub user_id: String,
    pub weight_unit: WeightUnit,
    pub distance_unit: DistanceUnit,
    pub daily_sets_goal: i32,
    pub daily_calories_goal: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub weight_unit: WeightUnit,
    pub distance_unit: DistanceUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoals {
    pub daily_sets_goal: i32,
    pub daily_calories_goal: i32,
}

/// Settings as clients see them: grouped, without row bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsResponse {
    pub measurements: Measurements,
    pub daily_goals: DailyGoals,
}

impl From<UserSettings> for UserSettingsResponse {
    fn from(settings: UserSettings) -> Self {
        Self {
            measurements: Measurements {
                weight_unit: settings.weight_unit,
                distance_unit: settings.distance_unit,
            },
            daily_goals: DailyGoals {
                daily_sets_goal: settings.daily_sets_goal,
                daily_calories_goal: settings.daily_calories_goal,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeasurementsRequest {
    pub weight_unit: Option<String>,
    pub distance_unit: Option<String>,
}

impl UpdateMeasurementsRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(unit) = &self.weight_unit {
            if WeightUnit::from_str(unit).is_none() {
                return Err("Invalid weight unit. Must be \"kg\" or \"lbs\"");
            }
        }
        if let Some(unit) = &self.distance_unit {
            if DistanceUnit::from_str(unit).is_none() {
                return Err("Invalid distance unit. Must be \"km\" or \"miles\"");
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.weight_unit.is_none() && self.distance_unit.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyGoalsRequest {
    pub daily_sets_goal: Option<i32>,
    pub daily_calories_goal: Option<i32>,
}

impl UpdateDailyGoalsRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(sets) = self.daily_sets_goal {
            if !(MIN_DAILY_SETS..=MAX_DAILY_SETS).contains(&sets) {
                return Err("Daily sets goal must be between 1 and 100");
            }
        }
        if let Some(calories) = self.daily_calories_goal {
            if !(MIN_DAILY_CALORIES..=MAX_DAILY_CALORIES).contains(&calories) {
                return Err("Daily calories goal must be between 50 and 2000");
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.daily_sets_goal.is_none() && self.daily_calories_goal.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub measurements: Option<UpdateMeasurementsRequest>,
    pub daily_goals: Option<UpdateDailyGoalsRequest>,
}

impl UpdateSettingsRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(measurements) = &self.measurements {
            measurements.validate()?;
        }
        if let Some(goals) = &self.daily_goals {
            goals.validate()?;
        }

        let has_measurements = self
            .measurements
            .as_ref()
            .map(|m| !m.is_empty())
            .unwrap_or(false);
        let has_goals = self
            .daily_goals
            .as_ref()
            .map(|g| !g.is_empty())
            .unwrap_or(false);

        if !has_measurements && !has_goals {
            return Err("No valid settings provided to update");
        }
        Ok(())
    }
}
