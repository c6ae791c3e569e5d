//! Handlers for student registration and listing.

use crate::api::extract::AppJson;
use crate::api::models::students::{StudentCreate, StudentListResponse, StudentResponse};
use crate::db::errors::DbError;
use crate::db::handlers::Students;
use crate::db::models::students::StudentCreateDBRequest;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    summary = "List students",
    description = "Lists all registered students, most recently registered first.",
    responses(
        (status = 200, description = "All registered students", body = StudentListResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<StudentListResponse>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let students = Students::new(&mut conn).list().await?;

    Ok(Json(StudentListResponse {
        items: students.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    summary = "Register student",
    description = "Registers a new student. Email addresses must be unique across all students.",
    request_body = StudentCreate,
    responses(
        (status = 201, description = "Student registered successfully", body = StudentResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "A student with this email already exists"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state, req), fields(email = %req.email))]
pub async fn register_student(
    State(state): State<AppState>,
    AppJson(req): AppJson<StudentCreate>,
) -> Result<(StatusCode, Json<StudentResponse>)> {
    // Validate before touching the database
    req.validate()?;

    let mut tx = state.db.begin().await.map_err(DbError::from)?;
    let mut students = Students::new(&mut tx);

    // Pre-check for a friendlier conflict message; the unique index on
    // email remains the source of truth if a concurrent insert wins.
    if students.find_by_email(&req.email).await?.is_some() {
        return Err(Error::Conflict {
            message: "A student with this email already exists.".to_string(),
        });
    }

    let created = students.create(&StudentCreateDBRequest::from(req)).await?;
    tx.commit().await.map_err(DbError::from)?;

    tracing::info!("student {} registered", created.id);

    Ok((StatusCode::CREATED, Json(created.into())))
}
