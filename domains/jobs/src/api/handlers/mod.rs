//! HTTP handlers for the Jobs domain

pub mod applications;
pub mod jobs;
