//! # Slotbook API
//!
//! The API crate provides the web server for the Slotbook appointment-booking
//! service. It exposes two endpoints: listing the open 30-minute slots of a day
//! and booking one of them.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into calls to the slot calculator and booking validator
//! - **Middleware**: Body extraction and error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Persistence is reached only through
//! [`AppointmentStore`], so the same router runs against Postgres in production
//! and an in-memory store in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers for slot listing and booking
pub mod handlers;
/// Body extraction and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::HeaderValue};
use eyre::{Result, WrapErr};
use slotbook_core::store::AppointmentStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use slotbook_api::ApiState;
/// use slotbook_db::mock::InMemoryAppointmentStore;
///
/// let state = Arc::new(ApiState::new(InMemoryAppointmentStore::new()));
/// let app = slotbook_api::app(state);
/// ```
pub struct ApiState {
    /// Where appointments are checked and stored
    pub store: Arc<dyn AppointmentStore>,
}

impl ApiState {
    pub fn new(store: impl AppointmentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Builds the router with every endpoint and request tracing.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot listing endpoints
        .merge(routes::slots::routes())
        // Booking endpoints
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins))
}

/// Starts the API server with the provided configuration and store
///
/// This function initializes logging, configures routes and layers, and
/// serves HTTP until the process is stopped.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use slotbook_api::config::ApiConfig;
/// use slotbook_db::{create_pool, PgAppointmentStore};
///
/// let config = ApiConfig::from_env()?;
/// let pool = create_pool(&config.database_url).await?;
/// slotbook_api::start_server(config, PgAppointmentStore::new(pool)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    store: impl AppointmentStore + 'static,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(store));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
