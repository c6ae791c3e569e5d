//! API request/response models for student registration.

use crate::db::models::students::StudentDBResponse;
use crate::errors::Error;
use crate::types::StudentId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Field-level email syntax check: one `@`, no whitespace, dotted domain.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Self-reported experience level of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for registering a new student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentCreate {
    /// Student full name
    #[schema(example = "Clara Schumann")]
    pub full_name: String,
    /// Contact email (must be unique)
    #[schema(example = "clara@example.com")]
    pub email: String,
    /// Phone number
    pub phone: Option<String>,
    /// Instrument of interest
    #[schema(example = "Piano")]
    pub instrument: Option<String>,
    /// Experience level (Beginner, Intermediate, or Advanced)
    pub experience_level: Option<ExperienceLevel>,
}

impl StudentCreate {
    /// Field-level validation, run before any database access.
    ///
    /// Enum membership for `experience_level` is already enforced during
    /// deserialization; this covers the checks serde cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation {
                field: "full_name".to_string(),
                message: "full_name must not be empty".to_string(),
            });
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(Error::Validation {
                field: "email".to_string(),
                message: format!("{:?} is not a valid email address", self.email),
            });
        }
        Ok(())
    }
}

/// Full student details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    /// Unique identifier for the student
    #[schema(value_type = i64)]
    pub id: StudentId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub instrument: Option<String>,
    pub experience_level: Option<String>,
}

impl From<StudentDBResponse> for StudentResponse {
    fn from(db: StudentDBResponse) -> Self {
        Self {
            id: db.id,
            full_name: db.full_name,
            email: db.email,
            phone: db.phone,
            instrument: db.instrument,
            experience_level: db.experience_level,
        }
    }
}

/// Collection wrapper returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentListResponse {
    pub items: Vec<StudentResponse>,
}
