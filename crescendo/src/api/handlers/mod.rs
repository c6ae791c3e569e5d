//! HTTP request handlers for the API endpoints.
//!
//! Each handler is responsible for request validation, business logic
//! execution via the database repositories, and response serialization.
//! Handlers return [`crate::errors::Error`], which converts to the
//! appropriate HTTP status code and body via `IntoResponse`.

pub mod students;
