//! Application services

mod assessment_service;

pub use assessment_service::{AssessmentConfig, AssessmentOutcome, AssessmentService};
