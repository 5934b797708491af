//! Table bootstrap
//!
//! Creates the `jobs` and `applicants` tables when they are missing. There is
//! no versioning; existing tables are left untouched.

use sqlx::PgPool;
use tracing::info;

const CREATE_JOBS: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id          SERIAL PRIMARY KEY,
    company     VARCHAR(100),
    title       VARCHAR(100) NOT NULL,
    description TEXT NOT NULL,
    location    VARCHAR(100) NOT NULL,
    salary      DOUBLE PRECISION NOT NULL
)
"#;

const CREATE_APPLICANTS: &str = r#"
CREATE TABLE IF NOT EXISTS applicants (
    id      SERIAL PRIMARY KEY,
    job_id  INTEGER NOT NULL REFERENCES jobs(id),
    fname   VARCHAR(100) NOT NULL,
    lname   VARCHAR(100) NOT NULL,
    email   VARCHAR(100) NOT NULL,
    phone   VARCHAR(20) NOT NULL,
    resume  TEXT NOT NULL
)
"#;

/// Create the job board tables if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    // jobs first: applicants references it
    sqlx::query(CREATE_JOBS).execute(pool).await?;
    sqlx::query(CREATE_APPLICANTS).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
