// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Responses API Server
//!
//! Stores and serves learner submissions for the interactive activities.

use activity_responses::{
    config::{Config, StoreBackend},
    db::{DocumentStore, FirestoreDb, MemoryDb},
    models::CATALOG,
    services::RecordService,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Activity Responses API");

    // Connect the document store once; handlers share this handle
    let store: DocumentStore = match config.store_backend {
        StoreBackend::Firestore => {
            let project_id = config.gcp_project_id.as_deref().unwrap_or_default();
            FirestoreDb::new(project_id).await?.into()
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; submissions are lost on restart");
            MemoryDb::new().into()
        }
    };
    tracing::info!(
        backend = store.backend_name(),
        activities = CATALOG.len(),
        "Document store ready"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        records: RecordService::new(store),
    });

    // Build router
    let app = activity_responses::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_responses=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
