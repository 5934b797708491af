//! Job listing and posting API handlers

use axum::{extract::State, http::StatusCode, Json};
use jobboard_common::{ApiPath, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, NewJob};

/// Request for posting a new job
#[derive(Debug, Deserialize, Validate)]
pub struct PostJobRequest {
    /// Hiring company, optional
    #[validate(length(min = 1, max = 100))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = 100))]
    pub location: String,

    pub salary: f64,
}

impl TryFrom<PostJobRequest> for NewJob {
    type Error = Error;

    fn try_from(req: PostJobRequest) -> Result<Self> {
        NewJob::new(
            req.company,
            req.title,
            req.description,
            req.location,
            req.salary,
        )
    }
}

/// Response for a successfully posted job
#[derive(Debug, Serialize)]
pub struct JobPostedResponse {
    pub message: String,
    pub job_id: i32,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// List all jobs
///
/// **GET /api/jobs**
///
/// Returns every job in the order it was posted.
pub async fn list_jobs(State(state): State<JobsState>) -> Result<Json<Vec<Job>>> {
    let jobs = state.repos.jobs.list().await?;
    tracing::debug!(count = jobs.len(), "Listed jobs");
    Ok(Json(jobs))
}

/// Get a single job by ID
///
/// **GET /api/jobs/{id}**
pub async fn get_job(
    State(state): State<JobsState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Job>> {
    let not_found = || Error::NotFound("Job not found".to_string());

    // Ids outside the SERIAL range can never match a row
    let id = i32::try_from(id).map_err(|_| not_found())?;
    let job = state.repos.jobs.find(id).await?.ok_or_else(not_found)?;

    Ok(Json(job))
}

/// Post a new job
///
/// **POST /api/job/post**
pub async fn post_job(
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<PostJobRequest>,
) -> Result<(StatusCode, Json<JobPostedResponse>)> {
    let new_job = NewJob::try_from(req)?;
    let job = state.repos.jobs.create(&new_job).await?;

    tracing::info!(job_id = job.id, title = %job.title, "Job posted");

    Ok((
        StatusCode::CREATED,
        Json(JobPostedResponse {
            message: "Job post created successfully!".to_string(),
            job_id: job.id,
            status_code: StatusCode::CREATED.as_u16(),
        }),
    ))
}
