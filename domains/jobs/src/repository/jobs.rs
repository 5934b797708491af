//! Job repository

use crate::domain::entities::{Job, NewJob};
use jobboard_common::Result;
use sqlx::PgPool;

/// Columns selected for every `Job` read
pub(crate) const JOB_COLUMNS: &str = "id, company, title, description, location, salary";

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all jobs in insertion order
    pub async fn list(&self) -> Result<Vec<Job>> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id ASC");
        let rows = sqlx::query_as::<_, Job>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find job by ID
    pub async fn find(&self, id: i32) -> Result<Option<Job>> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        let row = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Check whether a job with this ID exists
    pub async fn exists(&self, id: i32) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create a new job
    pub async fn create(&self, job: &NewJob) -> Result<Job> {
        let query = format!(
            "INSERT INTO jobs (company, title, description, location, salary) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Job>(&query)
            .bind(&job.company)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.location)
            .bind(job.salary)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}
