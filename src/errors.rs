use thiserror::Error;

/// Validation failures surfaced by [`crate::models::Posting::validate`].
///
/// The pure engine functions never raise: malformed-but-well-typed postings
/// degrade gracefully (empty fields normalize to `""`). This type exists for
/// hosts that want to reject bad records at the ingestion boundary before
/// they reach the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostingError {
    #[error("posting '{id}': required field '{field}' is empty")]
    MissingField { id: String, field: &'static str },

    #[error("posting '{id}': salary_min {min} exceeds salary_max {max}")]
    SalaryRange { id: String, min: u32, max: u32 },
}
