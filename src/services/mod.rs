// Business logic services

pub mod dashboard_service;
pub mod exercise_service;
pub mod routine_service;
pub mod settings_service;
pub mod user_service;
pub mod workout_service;

pub use dashboard_service::DashboardService;
pub use exercise_service::{CatalogFilter, ExerciseService};
pub use routine_service::RoutineService;
pub use settings_service::SettingsService;
pub use user_service::UserService;
pub use workout_service::WorkoutService;
