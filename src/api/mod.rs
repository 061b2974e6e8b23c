// HTTP routes and handlers

pub mod dashboard;
pub mod exercises;
pub mod health;
pub mod routes;
pub mod routines;
pub mod settings;
pub mod users;
pub mod workouts;

pub use routes::create_routes;
