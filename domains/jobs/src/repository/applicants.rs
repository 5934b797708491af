//! Applicant repository

use crate::domain::entities::{Applicant, NewApplicant};
use jobboard_common::{RepositoryError, Result};
use sqlx::PgPool;

const APPLICANT_COLUMNS: &str = "id, job_id, fname, lname, email, phone, resume";

#[derive(Clone)]
pub struct ApplicantRepository {
    pool: PgPool,
}

impl ApplicantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new applicant
    ///
    /// A `job_id` that no longer references a job fails with
    /// `RepositoryError::NotFound` instead of a database error.
    pub async fn create(
        &self,
        applicant: &NewApplicant,
    ) -> std::result::Result<Applicant, RepositoryError> {
        let query = format!(
            "INSERT INTO applicants (job_id, fname, lname, email, phone, resume) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {APPLICANT_COLUMNS}"
        );
        sqlx::query_as::<_, Applicant>(&query)
            .bind(applicant.job_id)
            .bind(&applicant.fname)
            .bind(&applicant.lname)
            .bind(&applicant.email)
            .bind(&applicant.phone)
            .bind(&applicant.resume)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from_write)
    }

    /// Find applicant by ID
    pub async fn find(&self, id: i32) -> Result<Option<Applicant>> {
        let query = format!("SELECT {APPLICANT_COLUMNS} FROM applicants WHERE id = $1");
        let row = sqlx::query_as::<_, Applicant>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Count applications submitted for a job
    pub async fn count_for_job(&self, job_id: i32) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applicants WHERE job_id = $1")
                .bind(job_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
