//! API request and response data models.
//!
//! API models are distinct from database models, allowing independent
//! evolution of API and storage representations. All models are annotated
//! with `utoipa` for automatic API docs.

pub mod students;
