//! Database models for students.

use crate::api::models::students::StudentCreate;
use crate::types::StudentId;
use chrono::{DateTime, Utc};

/// Database request for creating a new student
#[derive(Debug, Clone)]
pub struct StudentCreateDBRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub instrument: Option<String>,
    pub experience_level: Option<String>,
}

impl From<StudentCreate> for StudentCreateDBRequest {
    fn from(api: StudentCreate) -> Self {
        Self {
            full_name: api.full_name,
            email: api.email,
            phone: api.phone,
            instrument: api.instrument,
            experience_level: api.experience_level.map(|level| level.as_str().to_string()),
        }
    }
}

/// Database response for a student row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentDBResponse {
    pub id: StudentId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub instrument: Option<String>,
    pub experience_level: Option<String>,
    /// Internal bookkeeping only; not part of the API response shape.
    pub created_at: DateTime<Utc>,
}
