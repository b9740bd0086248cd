//! Skill matching and ranking of postings against one candidate profile.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{MatchLabel, MatchResult, Posting};
use crate::normalize::normalize_skill;

/// Label boundaries, inclusive lower bounds. Product policy constants — the
/// bands are adjustable without touching the scoring algorithm.
pub const EXCELLENT_MIN: u8 = 85;
pub const GOOD_MIN: u8 = 70;
pub const FAIR_MIN: u8 = 50;

/// A posting annotated with its match result, as returned by
/// [`rank_postings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPosting {
    pub posting: Posting,
    pub result: MatchResult,
}

/// Scores one posting's skill list against one candidate's.
///
/// Comparison is trim + case-fold only (see
/// [`normalize_skill`]), so "C++" and "Node.js" keep their punctuation.
/// Duplicate labels collapse to a single requirement. An empty requirement
/// list scores 100: a posting that states no requirements is treated as
/// fully matched rather than unscorable.
pub fn score(posting_skills: &[String], candidate_skills: &[String]) -> MatchResult {
    // First-occurrence display label per normalized key.
    let mut required: Vec<(String, String)> = Vec::new();
    let mut required_keys = HashSet::new();
    for label in posting_skills {
        let key = normalize_skill(label);
        if required_keys.insert(key.clone()) {
            required.push((key, label.clone()));
        }
    }

    let candidate_keys: HashSet<String> =
        candidate_skills.iter().map(|s| normalize_skill(s)).collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for (key, label) in &required {
        if candidate_keys.contains(key) {
            matched_skills.push(label.clone());
        } else {
            missing_skills.push(label.clone());
        }
    }

    let mut extra_skills = Vec::new();
    let mut extra_seen = HashSet::new();
    for label in candidate_skills {
        let key = normalize_skill(label);
        if !required_keys.contains(&key) && extra_seen.insert(key) {
            extra_skills.push(label.clone());
        }
    }

    let overall_score = if required.is_empty() {
        100
    } else {
        let ratio = matched_skills.len() as f64 / required.len() as f64;
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    };

    MatchResult {
        overall_score,
        matched_skills,
        missing_skills,
        extra_skills,
        label: label_for(overall_score),
    }
}

/// Maps a 0–100 score to its qualitative band.
pub fn label_for(score: u8) -> MatchLabel {
    if score >= EXCELLENT_MIN {
        MatchLabel::Excellent
    } else if score >= GOOD_MIN {
        MatchLabel::Good
    } else if score >= FAIR_MIN {
        MatchLabel::Fair
    } else {
        MatchLabel::Weak
    }
}

/// Scores every posting against the candidate and sorts descending by
/// `overall_score`. The sort is stable, so equal scores keep their input
/// order — downstream pagination relies on this.
pub fn rank_postings(postings: &[Posting], candidate_skills: &[String]) -> Vec<RankedPosting> {
    let mut ranked: Vec<RankedPosting> = postings
        .iter()
        .map(|posting| RankedPosting {
            posting: posting.clone(),
            result: score(&posting.skills, candidate_skills),
        })
        .collect();
    ranked.sort_by(|a, b| b.result.overall_score.cmp(&a.result.overall_score));
    ranked
}
