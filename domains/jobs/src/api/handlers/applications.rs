//! Job application API handlers

use axum::{extract::State, http::StatusCode, Json};
use jobboard_common::{Error, RepositoryError, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::JobsState;
use crate::domain::entities::NewApplicant;

const INVALID_JOB_MESSAGE: &str = "This is not a valid job_id";

/// Request for applying to a job
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyRequest {
    pub job_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub fname: String,

    #[validate(length(min = 1, max = 100))]
    pub lname: String,

    #[validate(length(min = 1, max = 100))]
    pub email: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,

    #[validate(length(min = 1))]
    pub resume: String,
}

impl TryFrom<ApplyRequest> for NewApplicant {
    type Error = Error;

    fn try_from(req: ApplyRequest) -> Result<Self> {
        // Ids outside the SERIAL range can never reference a job
        let job_id = i32::try_from(req.job_id)
            .map_err(|_| Error::NotFound(INVALID_JOB_MESSAGE.to_string()))?;
        NewApplicant::new(
            job_id,
            req.fname,
            req.lname,
            req.email,
            req.phone,
            req.resume,
        )
    }
}

/// Response for a successfully submitted application
#[derive(Debug, Serialize)]
pub struct ApplicationSubmittedResponse {
    pub message: String,
    pub applicant_id: i32,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Apply to a job
///
/// **POST /api/job/apply**
///
/// The referenced job must exist; otherwise nothing is written and the
/// response is a 404.
pub async fn apply_job(
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationSubmittedResponse>)> {
    let new_applicant = NewApplicant::try_from(req)?;

    if !state.repos.jobs.exists(new_applicant.job_id).await? {
        return Err(Error::NotFound(INVALID_JOB_MESSAGE.to_string()));
    }

    let applicant = state
        .repos
        .applicants
        .create(&new_applicant)
        .await
        .map_err(|e| match e {
            // Job vanished between the check and the insert
            RepositoryError::NotFound => Error::NotFound(INVALID_JOB_MESSAGE.to_string()),
            other => other.into(),
        })?;

    tracing::info!(
        applicant_id = applicant.id,
        job_id = applicant.job_id,
        "Application submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApplicationSubmittedResponse {
            message: "Application submitted successfully!".to_string(),
            applicant_id: applicant.id,
            status_code: StatusCode::CREATED.as_u16(),
        }),
    ))
}
