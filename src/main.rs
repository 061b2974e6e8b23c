use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use fittrack::api::create_routes;
use fittrack::auth::TokenVerifier;
use fittrack::config::{run_migrations, AppConfig, DatabaseConfig};
use fittrack::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    let db = database_config.create_pool().await?;
    run_migrations(&db).await?;
    info!("Database ready, migrations applied");

    let token_verifier = TokenVerifier::new(&config.token_secret);
    let cors = cors_layer(&config)?;
    let state = AppState {
        db,
        config: config.clone(),
        token_verifier,
    };

    let app = create_routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("FitTrack server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
