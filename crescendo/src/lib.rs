//! # crescendo: Student Registration Service
//!
//! `crescendo` is a small REST API for music-school student registration. It exposes a single
//! resource (`Student`) with create and list operations, persists records in MySQL, and serves
//! auto-generated OpenAPI documentation.
//!
//! ## Overview
//!
//! The service receives JSON requests over HTTP, validates them field by field, and reads or
//! writes the `students` table through a pooled MySQL connection. One invariant is enforced:
//! no two students share an email address. The application checks for an existing email before
//! inserting (for a friendly conflict message), while a unique index on the column remains the
//! source of truth under concurrent registrations - a lost race surfaces as the same conflict
//! error.
//!
//! ### Request Flow
//!
//! Requests to `/api/students` pass through CORS and trace middleware into the handlers in
//! [`api::handlers`], which validate input, call the [`db::handlers::Students`] repository, and
//! serialize responses from [`api::models`]. Errors convert to HTTP status codes via
//! [`errors::Error`]. Trailing slashes are normalized away before routing, so
//! `/api/students/` and `/api/students` are the same endpoint.
//!
//! ### Startup
//!
//! The database connection URI is resolved once at startup from a prioritized list of sources
//! (environment URL, discrete environment variables, fallback connection file - see [`config`]).
//! Schema initialization is an explicit, idempotent step: [`Application::new`] runs the bundled
//! sqlx migrations before the server starts accepting requests.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use crescendo::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = crescendo::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     crescendo::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::openapi::ApiDoc;
use anyhow::Context as _;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, ServiceExt, routing::get};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::NormalizePathLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use config::Config;
pub use types::StudentId;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub config: Config,
}

/// Get the crescendo database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Resolve the connection URI, build the connection pool, and run migrations.
#[instrument(skip_all)]
pub async fn setup_database(config: &Config) -> anyhow::Result<MySqlPool> {
    let database_url = config.database.resolve_url()?;
    let settings = &config.database.pool;

    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(optional_secs(settings.idle_timeout_secs))
        .max_lifetime(optional_secs(settings.max_lifetime_secs))
        // Validate liveness before reuse; stale connections are discarded
        .test_before_acquire(true)
        .connect(&database_url)
        .await
        .context("failed to connect to MySQL")?;

    // Schema initialization is an explicit, idempotent startup step
    migrator().run(&pool).await.context("failed to run database migrations")?;

    Ok(pool)
}

/// Pool knobs use 0 to mean "never"; sqlx wants an Option.
fn optional_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let wildcard = config
        .cors
        .allowed_origins
        .iter()
        .any(|origin| matches!(origin, CorsOrigin::Wildcard));
    if wildcard {
        cors = cors.allow_origin(tower_http::cors::Any);
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                origins.push(url.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
            }
        }
        cors = cors.allow_origin(origins);
    }

    if config.cors.allow_credentials {
        cors = cors.allow_credentials(true);
    }
    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router with all endpoints and middleware.
///
/// Wires the student routes under `/api`, the health check, the OpenAPI
/// document and Scalar UI, CORS from config, and tracing middleware.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route(
            "/students",
            get(api::handlers::students::list_students).post(api::handlers::students::register_student),
        )
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Create CORS layer from config
    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

pub struct Application {
    router: Router,
    config: Config,
    pool: MySqlPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting student registry with configuration: {:#?}", config);

        // Resolve the connection URI, connect, and run migrations
        let pool = setup_database(&config).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Student registry listening on http://{}, docs at http://localhost:{}/docs",
            bind_addr, self.config.port
        );

        // Normalize trailing slashes before path matching
        let service = NormalizePathLayer::trim_trailing_slash().layer(self.router);

        // Run the server with graceful shutdown
        axum::serve(listener, ServiceExt::<Request>::into_make_service(service))
            .with_graceful_shutdown(shutdown)
            .await?;

        // Close database connections
        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
