pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::config::AppConfig;

/// Shared state for all routers and extractors
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: AppConfig,
    pub token_verifier: TokenVerifier,
}
