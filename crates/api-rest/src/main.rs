//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you want the REST server (with OpenAPI/Swagger UI)
//! without the workspace's main `nexus-run` binary.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use nexus_core::{
    config::{cases_file_from_env_value, min_similarity_from_env_value},
    CoreConfig, PrecedentLetterService, SystemClock,
};

/// Main entry point for the Nexus REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `NEXUS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `NEXUS_CASES_FILE`: Historical case dataset (default: built-in reference dataset)
/// - `NEXUS_MIN_SIMILARITY`: Match threshold as a fraction (default: 0.65)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration or case dataset is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("nexus_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("NEXUS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    tracing::info!("-- Starting Nexus REST API on {}", addr);

    let cfg = CoreConfig::new(
        min_similarity_from_env_value(std::env::var("NEXUS_MIN_SIMILARITY").ok())?,
        cases_file_from_env_value(std::env::var("NEXUS_CASES_FILE").ok())?,
    );
    let store = cfg.open_case_store()?;
    let service = PrecedentLetterService::new(store, SystemClock, &cfg);

    let app = router(AppState {
        service: Arc::new(service),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
