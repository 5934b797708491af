//! Route definitions for Jobs domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{applications, jobs};
use super::middleware::JobsState;

/// Create job listing and posting routes
fn job_routes() -> Router<JobsState> {
    Router::new()
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/{id}", get(jobs::get_job))
        .route("/api/job/post", post(jobs::post_job))
}

/// Create application routes
fn application_routes() -> Router<JobsState> {
    Router::new().route("/api/job/apply", post(applications::apply_job))
}

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .merge(job_routes())
        .merge(application_routes())
}
