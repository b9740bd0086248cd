use serde::{Deserialize, Serialize};

/// Qualitative band derived solely from `overall_score`.
///
/// Variant order is the quality order, so `Weak < Fair < Good < Excellent`
/// holds under the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchLabel {
    Weak,
    Fair,
    Good,
    Excellent,
}

/// How one posting's stated requirements line up against one candidate.
///
/// `matched_skills` and `missing_skills` partition the posting's skill set
/// (deduplicated by trimmed, case-folded form); `extra_skills` are candidate
/// skills the posting never asked for. All three carry the first-occurrence
/// display label, not the normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub label: MatchLabel,
}

impl MatchResult {
    /// One-line human-readable explanation of the score, naming up to three
    /// missing skills.
    pub fn summary(&self) -> String {
        let top_missing: Vec<&str> = self
            .missing_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        match self.label {
            MatchLabel::Excellent if top_missing.is_empty() => format!(
                "Excellent match ({}%). Every listed requirement is covered.",
                self.overall_score
            ),
            MatchLabel::Excellent => format!(
                "Excellent match ({}%). Still missing: {}.",
                self.overall_score,
                top_missing.join(", ")
            ),
            MatchLabel::Good => format!(
                "Good match ({}%). Consider brushing up on: {}.",
                self.overall_score,
                top_missing.join(", ")
            ),
            MatchLabel::Fair => format!(
                "Fair match ({}%). Notable gaps: {}.",
                self.overall_score,
                top_missing.join(", ")
            ),
            MatchLabel::Weak => format!(
                "Weak match ({}%). Most requirements are not covered: {}.",
                self.overall_score,
                top_missing.join(", ")
            ),
        }
    }
}
