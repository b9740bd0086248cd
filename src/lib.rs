//! jobsift — deduplication and candidate-match scoring for job postings.
//!
//! Ingestion collaborators feed [`Posting`] records in; the engine collapses
//! near-duplicates and scores what remains against a candidate's skill set:
//!
//! raw postings → [`normalize()`] → [`deduplicate`] → [`score`] /
//! [`rank_postings`] → ranked, annotated postings for display.
//!
//! Everything is pure, deterministic, and in-memory. The only state is the
//! per-run [`DedupState`], so independent calls are safe to run concurrently
//! without locking. Fetching, persistence, and presentation belong to the
//! surrounding application.

pub mod config;
pub mod dedup;
pub mod errors;
pub mod matching;
pub mod models;
pub mod normalize;

pub use config::EngineConfig;
pub use dedup::{deduplicate, deduplicate_with_config, DedupState, Signature};
pub use errors::PostingError;
pub use matching::{rank_postings, score, RankedPosting};
pub use models::{MatchLabel, MatchResult, Posting};
pub use normalize::{normalize, normalize_skill};
