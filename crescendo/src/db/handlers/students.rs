//! Database repository for student records.

use crate::db::{
    errors::Result,
    models::students::{StudentCreateDBRequest, StudentDBResponse},
};
use crate::types::StudentId;
use sqlx::MySqlConnection;
use tracing::instrument;

pub struct Students<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Students<'c> {
    /// Create a new Students repository instance
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Insert a new student and return the stored row, including its
    /// generated identifier.
    #[instrument(skip(self, request), fields(email = %request.email), err)]
    pub async fn create(&mut self, request: &StudentCreateDBRequest) -> Result<StudentDBResponse> {
        let result = sqlx::query(
            "INSERT INTO students (full_name, email, phone, instrument, experience_level)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.full_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.instrument)
        .bind(&request.experience_level)
        .execute(&mut *self.db)
        .await?;

        let id = result.last_insert_id() as StudentId;
        self.get_by_id(id).await
    }

    /// Fetch a student by id.
    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: StudentId) -> Result<StudentDBResponse> {
        let student = sqlx::query_as::<_, StudentDBResponse>(
            "SELECT id, full_name, email, phone, instrument, experience_level, created_at
             FROM students
             WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(student)
    }

    /// List all students, most recently created first.
    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<StudentDBResponse>> {
        let students = sqlx::query_as::<_, StudentDBResponse>(
            "SELECT id, full_name, email, phone, instrument, experience_level, created_at
             FROM students
             ORDER BY id DESC",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(students)
    }

    /// Look up a student by email address.
    #[instrument(skip(self, email), err)]
    pub async fn find_by_email(&mut self, email: &str) -> Result<Option<StudentDBResponse>> {
        let student = sqlx::query_as::<_, StudentDBResponse>(
            "SELECT id, full_name, email, phone, instrument, experience_level, created_at
             FROM students
             WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use sqlx::MySqlPool;

    fn request(email: &str) -> StudentCreateDBRequest {
        StudentCreateDBRequest {
            full_name: "Ada Lovelace".to_string(),
            email: email.to_string(),
            phone: Some("+44 20 7946 0000".to_string()),
            instrument: Some("Piano".to_string()),
            experience_level: Some("Beginner".to_string()),
        }
    }

    #[sqlx::test]
    async fn create_returns_generated_id_and_list_orders_newest_first(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        let first = repo.create(&request("first@example.com")).await.unwrap();
        let second = repo.create(&request("second@example.com")).await.unwrap();
        assert!(second.id > first.id);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[sqlx::test]
    async fn list_on_empty_table_returns_empty(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[sqlx::test]
    async fn duplicate_email_is_a_unique_violation(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        repo.create(&request("dupe@example.com")).await.unwrap();
        let err = repo.create(&request("dupe@example.com")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[sqlx::test]
    async fn find_by_email_distinguishes_present_and_absent(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        repo.create(&request("present@example.com")).await.unwrap();

        let found = repo.find_by_email("present@example.com").await.unwrap();
        assert_eq!(found.unwrap().full_name, "Ada Lovelace");

        let missing = repo.find_by_email("absent@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[sqlx::test]
    async fn optional_fields_round_trip_as_null(pool: MySqlPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Students::new(&mut conn);

        let created = repo
            .create(&StudentCreateDBRequest {
                full_name: "Bare Minimum".to_string(),
                email: "bare@example.com".to_string(),
                phone: None,
                instrument: None,
                experience_level: None,
            })
            .await
            .unwrap();

        assert!(created.phone.is_none());
        assert!(created.instrument.is_none());
        assert!(created.experience_level.is_none());
    }
}
