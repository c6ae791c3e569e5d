//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for the student endpoints
//! - **[`models`]**: Request/response data structures for API communication
//! - **[`extract`]**: Shared request extractors
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod extract;
pub mod handlers;
pub mod models;
