//! services/web/src/bin/fitflix.rs

use fitflix_core::SessionStore;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use web_lib::{
    adapters::InMemorySessionStore,
    config::Config,
    error::WebError,
    web::{rest::ApiDoc, router, AppState},
};

#[tokio::main]
async fn main() -> Result<(), WebError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Session Store & Expiry Purge ---
    let store = Arc::new(InMemorySessionStore::new(config.session_ttl));
    let shutdown = CancellationToken::new();
    let purge_task = tokio::spawn(purge_sessions(
        store.clone(),
        config.session_purge_interval,
        shutdown.clone(),
    ));

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState::new(config.clone(), store)?);
    info!(
        "Catalog loaded with {} cities, {} gyms, {} trainers",
        app_state.catalog.cities().len(),
        app_state.catalog.gyms().len(),
        app_state.catalog.trainers().len()
    );

    // --- 4. Create the Web Router ---
    let app = router(app_state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // --- 5. Start the Server ---
    info!("Fitflix server running on http://{}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await?;

    shutdown.cancel();
    if let Err(e) = purge_task.await {
        error!("Session purge task failed: {:?}", e);
    }
    info!("Server stopped.");
    Ok(())
}

/// Periodically drops expired sessions until `shutdown` is cancelled.
async fn purge_sessions(
    store: Arc<InMemorySessionStore>,
    every: std::time::Duration,
    shutdown: CancellationToken,
) {
    let mut interval = tokio::time::interval(every);
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = interval.tick() => match store.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => info!(
                    "Purged {} expired sessions, {} active",
                    purged,
                    store.session_count().await
                ),
                Err(e) => error!("Failed to purge sessions: {:?}", e),
            },
        }
    }
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!("Failed to listen for shutdown signal: {:?}", e);
            }
            info!("Shutdown signal received.");
        }
        _ = shutdown.cancelled() => {}
    }
}
