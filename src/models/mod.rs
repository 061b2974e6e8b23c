// Data models and wire types

pub mod dashboard;
pub mod exercise;
pub mod routine;
pub mod settings;
pub mod user;
pub mod workout_session;

pub use dashboard::*;
pub use exercise::*;
pub use routine::*;
pub use settings::*;
pub use user::*;
pub use workout_session::*;
