//! Job board domain entities
//!
//! `Job` and `Applicant` mirror the stored rows. `NewJob` and `NewApplicant`
//! are the validated insert payloads; constructing one enforces the same
//! presence and width rules the table columns impose.

use serde::{Deserialize, Serialize};

use jobboard_common::{Error, Result};

/// Width of the `VARCHAR(100)` columns
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Width of the `applicants.phone` column
pub const MAX_PHONE_LEN: usize = 20;

/// Job entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: i32,
    pub company: Option<String>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: f64,
}

/// Insert payload for a job
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub company: Option<String>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: f64,
}

impl NewJob {
    /// Create a new job payload with validation
    pub fn new(
        company: Option<String>,
        title: String,
        description: String,
        location: String,
        salary: f64,
    ) -> Result<Self> {
        if let Some(ref company) = company {
            check_text("company", company, Some(MAX_SHORT_TEXT_LEN))?;
        }
        check_text("title", &title, Some(MAX_SHORT_TEXT_LEN))?;
        check_text("description", &description, None)?;
        check_text("location", &location, Some(MAX_SHORT_TEXT_LEN))?;

        if !salary.is_finite() {
            return Err(Error::Validation("salary must be a finite number".to_string()));
        }

        Ok(Self {
            company,
            title,
            description,
            location,
            salary,
        })
    }
}

/// Applicant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Applicant {
    pub id: i32,
    pub job_id: i32,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
}

/// Insert payload for an application
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplicant {
    pub job_id: i32,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
}

impl NewApplicant {
    /// Create a new application payload with validation
    pub fn new(
        job_id: i32,
        fname: String,
        lname: String,
        email: String,
        phone: String,
        resume: String,
    ) -> Result<Self> {
        check_text("fname", &fname, Some(MAX_SHORT_TEXT_LEN))?;
        check_text("lname", &lname, Some(MAX_SHORT_TEXT_LEN))?;
        check_text("email", &email, Some(MAX_SHORT_TEXT_LEN))?;
        check_text("phone", &phone, Some(MAX_PHONE_LEN))?;
        check_text("resume", &resume, None)?;

        Ok(Self {
            job_id,
            fname,
            lname,
            email,
            phone,
            resume,
        })
    }
}

/// Reject blank values, values PostgreSQL cannot store as text, and values
/// wider than the column
fn check_text(field: &str, value: &str, max_len: Option<usize>) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be blank", field)));
    }
    if value.contains('\0') {
        return Err(Error::Validation(format!(
            "{} must not contain NUL characters",
            field
        )));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(Error::Validation(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }
    }
    Ok(())
}
