//! End-to-end: raw postings through dedup, scoring, and ranking.

use jobsift::{deduplicate, rank_postings, score, MatchLabel, Posting};

fn posting(id: &str, title: &str, company: &str, skills: &[&str]) -> Posting {
    Posting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        salary_min: None,
        salary_max: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        description: None,
    }
}

#[test]
fn dedup_then_rank_single_query_batch() {
    let raw = vec![
        posting("a", "Frontend Developer", "Acme", &["React", "CSS"]),
        posting("b", "Frontend Dev", "Acme", &["React", "CSS"]),
        posting("c", "Backend Engineer", "Acme", &["Go", "SQL"]),
    ];

    let kept = deduplicate(raw);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].id, "a");
    assert_eq!(kept[1].id, "c");

    let candidate = vec!["react".to_string()];
    let ranked = rank_postings(&kept, &candidate);

    assert_eq!(ranked[0].posting.id, "a");
    assert_eq!(ranked[0].result.overall_score, 50);
    assert_eq!(ranked[0].result.label, MatchLabel::Fair);
    assert_eq!(ranked[0].result.matched_skills, vec!["React".to_string()]);
    assert_eq!(ranked[0].result.missing_skills, vec!["CSS".to_string()]);

    assert_eq!(ranked[1].posting.id, "c");
    assert_eq!(ranked[1].result.overall_score, 0);
    assert_eq!(ranked[1].result.label, MatchLabel::Weak);
}

#[test]
fn pipeline_is_deterministic_end_to_end() {
    let raw = vec![
        posting("a", "Senior Software Engineer", "Acme Inc", &["Rust", "Go"]),
        posting("b", "Senior Software Engineer II", "Acme Inc", &["Rust"]),
        posting("c", "Software Engineer", "Beta Inc", &["Rust", "Go", "SQL"]),
        posting("d", "Data Analyst", "Beta Inc", &["SQL", "Python"]),
    ];
    let candidate = vec!["rust".to_string(), "sql".to_string()];

    let run = |input: Vec<Posting>| rank_postings(&deduplicate(input), &candidate);
    assert_eq!(run(raw.clone()), run(raw));
}

#[test]
fn results_survive_json_round_trip_for_display() {
    let result = score(
        &["React".to_string(), "CSS".to_string()],
        &["react".to_string(), "Go".to_string()],
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["overall_score"], 50);
    assert_eq!(json["label"], "FAIR");
    assert_eq!(json["extra_skills"][0], "Go");
    assert!(result.summary().contains("CSS"));
}
