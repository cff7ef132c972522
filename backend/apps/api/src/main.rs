//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use launch::{LaunchAppState, LaunchConfig, launch_router};
use platform::config::{env_parse, env_secret, env_var};
use player::{PgPlayerRepository, PlayerConfig, player_router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,launch=info,player=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let launch_config = load_launch_config()?;

    // Database connection
    let database_url = env_var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // CORS configuration
    let frontend_origins =
        env_var("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let launch_state = LaunchAppState::new(launch_config);
    let api = launch_router(launch_state.clone()).merge(player_router(
        PgPlayerRepository::new(pool),
        PlayerConfig::default(),
        launch_state,
    ));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env_parse("API_BIND_ADDR")?
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 31113)));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Verifier configuration from `TELEGRAM_BOT_TOKEN` and `LAUNCH_MAX_AGE_SECS`
fn load_launch_config() -> anyhow::Result<LaunchConfig> {
    let bot_token = env_secret("TELEGRAM_BOT_TOKEN");
    if bot_token.is_none() {
        tracing::warn!("TELEGRAM_BOT_TOKEN is not set; every launch payload will be rejected");
    }

    let mut config = LaunchConfig::new(bot_token);

    if let Some(secs) = env_parse::<u64>("LAUNCH_MAX_AGE_SECS")? {
        config = config.with_max_age(Duration::from_secs(secs));
    }

    match config.max_age {
        Some(max_age) => tracing::info!(max_age_secs = max_age.as_secs(), "Launch freshness check enabled"),
        None => tracing::info!("Launch freshness check disabled"),
    }

    Ok(config)
}
