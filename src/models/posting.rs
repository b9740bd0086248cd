use serde::{Deserialize, Serialize};

use crate::errors::PostingError;

/// One job advertisement as supplied by an ingestion collaborator.
///
/// Immutable once handed to the engine: the deduplicator and matcher only
/// read it or clone it into derived records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    /// Opaque stable identifier, caller-supplied, unique per source.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Posting {
    /// Ingestion-boundary check: required text fields non-empty after
    /// trimming, salary range ordered when both ends are present.
    ///
    /// The engine itself never calls this — it degrades gracefully on empty
    /// fields instead of erroring. Hosts that want to reject sparse records
    /// should do so before deduplication, since empty titles over-merge.
    pub fn validate(&self) -> Result<(), PostingError> {
        for (field, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(PostingError::MissingField {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(PostingError::SalaryRange {
                    id: self.id.clone(),
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> Posting {
        Posting {
            id: "src-1".to_string(),
            title: "Software Engineer".to_string(),
            company: "Acme Inc".to_string(),
            location: "Austin, TX".to_string(),
            salary_min: Some(90_000),
            salary_max: Some(120_000),
            skills: vec!["Rust".to_string()],
            description: None,
        }
    }

    #[test]
    fn test_valid_posting_passes() {
        assert_eq!(posting().validate(), Ok(()));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut p = posting();
        p.title = "   ".to_string();
        assert_eq!(
            p.validate(),
            Err(PostingError::MissingField {
                id: "src-1".to_string(),
                field: "title",
            })
        );
    }

    #[test]
    fn test_inverted_salary_range_is_rejected() {
        let mut p = posting();
        p.salary_min = Some(150_000);
        assert!(matches!(
            p.validate(),
            Err(PostingError::SalaryRange { min: 150_000, max: 120_000, .. })
        ));
    }

    #[test]
    fn test_open_ended_salary_is_fine() {
        let mut p = posting();
        p.salary_max = None;
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn test_deserializes_sparse_ingestion_json() {
        let json = r#"{
            "id": "board-42",
            "title": "Backend Engineer",
            "company": "Beta Inc",
            "location": "Remote"
        }"#;
        let p: Posting = serde_json::from_str(json).unwrap();
        assert_eq!(p.salary_min, None);
        assert!(p.skills.is_empty());
        assert_eq!(p.description, None);
    }
}
