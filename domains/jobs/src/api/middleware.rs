//! Jobs domain state

use crate::JobsRepositories;
use sqlx::PgPool;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub repos: JobsRepositories,
}

impl JobsState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repos: JobsRepositories::new(pool),
        }
    }
}

