//! Workout statistics aggregation. Everything here is a pure function of the
//! session collection and an injected reference instant; the service wrapper
//! only fetches rows and delegates.

use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, Utc};
use sqlx::PgPool;

use crate::models::{DailyActivity, DashboardStats, SessionSet, WorkoutSession, WorkoutSessionResponse};
use crate::services::WorkoutService;

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

impl DashboardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch the caller's complete session history and aggregate it
    #[tracing::instrument(skip(self))]
    pub async fn get_dashboard_stats(&self, user_id: &str) -> Result<DashboardStats> {
        let sessions = WorkoutService::new(self.db.clone())
            .get_sessions(user_id)
            .await?;
        Ok(compute_dashboard_stats(&sessions, Utc::now()))
    }
}

/// Aggregate one user's session collection into dashboard statistics. `now`
/// fixes every temporal bucket; callers inject it so the computation stays
/// deterministic and testable.
pub fn compute_dashboard_stats(
    sessions: &[WorkoutSession],
    now: DateTime<Utc>,
) -> DashboardStats {
    let mut stats = DashboardStats::default();

    accumulate_lifetime(&mut stats, sessions);
    rollup_today(&mut stats, sessions, now);
    rollup_week(&mut stats, sessions, now);
    stats.daily_data = daily_series(sessions, now);
    stats.recent_workouts = recent_workouts(sessions);

    stats
}

/// Whether a set participates in lifetime totals. An explicit `done: false`
/// is authoritative. An absent flag falls back to recorded effort because
/// older write paths never populated it.
pub fn set_counts_toward_totals(set: &SessionSet) -> bool {
    match set.done {
        Some(true) => true,
        Some(false) => false,
        None => {
            set.reps.unwrap_or(0) > 0
                || set.time.unwrap_or(0.0) > 0.0
                || set.distance.unwrap_or(0.0) > 0.0
        }
    }
}

fn accumulate_lifetime(stats: &mut DashboardStats, sessions: &[WorkoutSession]) {
    stats.total_workouts = sessions.len() as i64;

    for session in sessions {
        stats.total_calories_burned += session.calories.unwrap_or(0.0);

        for exercise in &session.exercises {
            for set in &exercise.sets {
                if !set_counts_toward_totals(set) {
                    continue;
                }

                let reps = set.reps.unwrap_or(0);
                let weight = set.weight.unwrap_or(0.0);
                let time = set.time.unwrap_or(0.0);
                let distance = set.distance.unwrap_or(0.0);

                // Metric kind is inferred from the set itself, not from the
                // exercise type, and a set carrying both kinds contributes to
                // both rollups.
                if time > 0.0 || distance > 0.0 {
                    stats.total_cardio_minutes += time;
                    stats.total_cardio_distance += distance;
                }
                if reps > 0 || weight > 0.0 {
                    let volume = reps as f64 * weight;
                    stats.total_volume += volume;
                    stats.total_weight += volume;
                    stats.total_reps += reps as i64;
                }

                stats.total_sets += 1;
            }
        }
    }
}

fn rollup_today(stats: &mut DashboardStats, sessions: &[WorkoutSession], now: DateTime<Utc>) {
    let today = now.date_naive();

    for session in sessions {
        if session.created_at.date_naive() != today {
            continue;
        }

        stats.today_calories += session.calories.unwrap_or(0.0);
        for exercise in &session.exercises {
            for set in &exercise.sets {
                // Stricter than the lifetime classifier: only an explicit
                // done flag moves the daily goal.
                if set.done == Some(true) {
                    stats.today_sets += 1;
                }
            }
        }
    }
}

fn rollup_week(stats: &mut DashboardStats, sessions: &[WorkoutSession], now: DateTime<Utc>) {
    let week_start = now - Duration::days(7);

    for session in sessions {
        if session.created_at < week_start {
            continue;
        }
        stats.weekly_workouts += 1;
        stats.weekly_volume += guarded_session_volume(session);
    }
}

/// Volume as charted by the week bucket and the daily series: explicit done
/// flags only, and only on exercises not typed strength (1). The exclusion is
/// intentional; these charts are defined over the non-strength contribution.
fn guarded_session_volume(session: &WorkoutSession) -> f64 {
    let mut volume = 0.0;
    for exercise in &session.exercises {
        for set in &exercise.sets {
            if set.done == Some(true) && exercise.exercise_type != 1 {
                volume += set.reps.unwrap_or(0) as f64 * set.weight.unwrap_or(0.0);
            }
        }
    }
    volume
}

/// Seven fixed slots anchored at Monday of the reference instant's calendar
/// week, emitted in full even when nothing was logged.
fn daily_series(sessions: &[WorkoutSession], now: DateTime<Utc>) -> Vec<DailyActivity> {
    let today = now.date_naive();
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    DAYS.iter()
        .enumerate()
        .map(|(offset, day)| {
            let date = monday + Duration::days(offset as i64);
            let mut volume = 0.0;
            let mut workouts = 0;
            for session in sessions {
                if session.created_at.date_naive() == date {
                    workouts += 1;
                    volume += guarded_session_volume(session);
                }
            }
            DailyActivity {
                day: (*day).to_string(),
                value: (volume / 100.0).round() as i64,
                workouts,
                volume,
            }
        })
        .collect()
}

/// The five most recent sessions, newest first, with resolved routines lifted
pub fn recent_workouts(sessions: &[WorkoutSession]) -> Vec<WorkoutSessionResponse> {
    let mut ordered: Vec<&WorkoutSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ordered
        .into_iter()
        .take(5)
        .map(WorkoutSessionResponse::from_session)
        .collect()
}
