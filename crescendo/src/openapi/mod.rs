//! OpenAPI documentation configuration.
//!
//! The generated document is served as JSON at `/api-docs/openapi.json`,
//! with an interactive Scalar UI at `/docs`.

use utoipa::OpenApi;

use crate::api::models::students::{ExperienceLevel, StudentCreate, StudentListResponse, StudentResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crescendo Registration API",
        description = "Student registration and listing for music schools."
    ),
    paths(
        crate::api::handlers::students::list_students,
        crate::api::handlers::students::register_student,
    ),
    components(schemas(StudentCreate, StudentResponse, StudentListResponse, ExperienceLevel)),
    tags(
        (name = "students", description = "Endpoints for student registration and listing.")
    )
)]
pub struct ApiDoc;
