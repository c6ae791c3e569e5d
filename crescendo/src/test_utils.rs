//! Helpers for constructing the application in tests.

use crate::{AppState, Config, build_router};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::MySqlPool;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Build a test server over the real router, with the same trailing-slash
/// normalization the production server applies.
pub fn test_app(pool: MySqlPool) -> axum_test::TestServer {
    let state = AppState {
        db: pool,
        config: Config::default(),
    };
    let router = build_router(state).expect("failed to build router");
    let service = NormalizePathLayer::trim_trailing_slash().layer(router);
    axum_test::TestServer::new(ServiceExt::<Request>::into_make_service(service)).expect("failed to create test server")
}
