use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use nexus_core::config::{cases_file_from_env_value, min_similarity_from_env_value};
use nexus_core::{CoreConfig, PrecedentLetterService, SystemClock};

/// Main entry point for the Nexus application
///
/// Loads the historical case dataset once, then serves the REST API (with Swagger UI at
/// `/swagger-ui`) until interrupted.
///
/// # Environment Variables
/// - `NEXUS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `NEXUS_CASES_FILE`: Historical case dataset, YAML or JSON (default: built-in dataset)
/// - `NEXUS_MIN_SIMILARITY`: Match threshold as a fraction between 0 and 1 (default: 0.65)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, dataset loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nexus_run=info".parse()?)
                .add_directive("nexus_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("NEXUS_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let cfg = CoreConfig::new(
        min_similarity_from_env_value(std::env::var("NEXUS_MIN_SIMILARITY").ok())?,
        cases_file_from_env_value(std::env::var("NEXUS_CASES_FILE").ok())?,
    );
    let store = cfg.open_case_store()?;
    tracing::info!(
        "++ Loaded {} historical cases, minimum similarity {}",
        store.len(),
        cfg.min_similarity().percent()
    );

    let service = PrecedentLetterService::new(store, SystemClock, &cfg);
    let rest_app = router(AppState {
        service: Arc::new(service),
    });

    tracing::info!("++ Starting Nexus REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, rest_app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Nexus REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
