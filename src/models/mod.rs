pub mod match_result;
pub mod posting;

pub use match_result::{MatchLabel, MatchResult};
pub use posting::Posting;
