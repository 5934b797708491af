//! Repository implementations for Jobs domain

pub mod applicants;
pub mod jobs;
pub mod schema;

use sqlx::PgPool;

pub use applicants::ApplicantRepository;
pub use jobs::JobRepository;
pub use schema::ensure_schema;

/// Combined repository access for the Jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pub jobs: JobRepository,
    pub applicants: ApplicantRepository,
}

impl JobsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: JobRepository::new(pool.clone()),
            applicants: ApplicantRepository::new(pool),
        }
    }
}
