//! Order-preserving near-duplicate collapse for job postings.
//!
//! Worst case O(n²) posting pairs with an O(L²) Levenshtein per title
//! comparison. Fine for one search query's result set (tens to low hundreds
//! of postings); bucket by company or location first before pointing this at
//! a whole corpus.

use std::collections::HashMap;

use tracing::debug;

use crate::config::EngineConfig;
use crate::models::Posting;
use crate::normalize::normalize;

/// Sentinel for postings that state no salary at all.
const SALARY_UNSPECIFIED: &str = "unspecified";

/// Normalized comparison key derived from a posting's text fields.
///
/// Derivation is a pure function of the posting text, so identical input
/// always yields an identical signature across runs. Salary and location are
/// recorded but deliberately not consulted by the duplicate rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub title_key: String,
    pub company_key: String,
    pub location_key: String,
    pub salary_key: String,
}

impl Signature {
    pub fn of(posting: &Posting) -> Self {
        Self {
            title_key: normalize(&posting.title),
            company_key: normalize(&posting.company),
            location_key: normalize(&posting.location),
            salary_key: salary_key(posting.salary_min, posting.salary_max),
        }
    }

    /// Exact-match key for the O(1) short-circuit.
    pub fn exact_key(&self) -> String {
        format!("{}|{}|{}", self.title_key, self.company_key, self.location_key)
    }
}

fn salary_key(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (None, None) => SALARY_UNSPECIFIED.to_string(),
        _ => format!(
            "{}-{}",
            min.map(|v| v.to_string()).unwrap_or_default(),
            max.map(|v| v.to_string()).unwrap_or_default()
        ),
    }
}

/// Accumulator for one deduplication run.
///
/// Owned by a single [`deduplicate`] call in the common case. Hosts that
/// genuinely need duplicate memory across batches can hold one explicitly
/// and feed postings through [`DedupState::offer`] — the state is always
/// passed, never hidden in a module-level cache, so independent runs cannot
/// contaminate each other.
#[derive(Debug, Default)]
pub struct DedupState {
    config: EngineConfig,
    retained: Vec<Posting>,
    signatures: Vec<Signature>,
    seen_keys: HashMap<String, usize>,
}

impl DedupState {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            retained: Vec::new(),
            signatures: Vec::new(),
            seen_keys: HashMap::new(),
        }
    }

    /// Offers one posting; returns `true` when it was retained, `false` when
    /// it was judged a duplicate of an earlier retained posting.
    pub fn offer(&mut self, posting: Posting) -> bool {
        let signature = Signature::of(&posting);
        let exact_key = signature.exact_key();

        if let Some(&index) = self.seen_keys.get(&exact_key) {
            debug!(
                skipped = %posting.id,
                kept = %self.retained[index].id,
                "exact signature match, dropping posting"
            );
            return false;
        }

        if let Some(index) = self.find_fuzzy_duplicate(&signature) {
            debug!(
                skipped = %posting.id,
                kept = %self.retained[index].id,
                "fuzzy title match, dropping posting"
            );
            return false;
        }

        self.seen_keys.insert(exact_key, self.retained.len());
        self.signatures.push(signature);
        self.retained.push(posting);
        true
    }

    pub fn retained(&self) -> &[Posting] {
        &self.retained
    }

    pub fn into_retained(self) -> Vec<Posting> {
        self.retained
    }

    fn find_fuzzy_duplicate(&self, candidate: &Signature) -> Option<usize> {
        self.signatures
            .iter()
            .position(|kept| is_duplicate(candidate, kept, self.config.title_similarity_threshold))
    }
}

/// Duplicate rule over two signatures: the company keys must agree, and the
/// titles must match exactly, by containment ("frontend dev" inside
/// "frontend developer"), or by Levenshtein similarity above the threshold.
/// Salary and location are never consulted, so two same-title postings at
/// different pay bands will merge.
fn is_duplicate(a: &Signature, b: &Signature, threshold: f64) -> bool {
    a.company_key == b.company_key && titles_match(&a.title_key, &b.title_key, threshold)
}

fn titles_match(a: &str, b: &str, threshold: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a)) {
        return true;
    }
    title_similarity(a, b) > threshold
}

/// Normalized similarity in `0.0..=1.0`: `1 − lev(a, b) / max(|a|, |b|)`,
/// counted in chars over the full strings, defined as 1.0 when both are
/// empty.
fn title_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(a, b);
    1.0 - distance as f64 / longest as f64
}

/// Filters an ordered batch of postings down to its non-duplicate subset,
/// preserving first-seen order: the first occurrence of a duplicate group is
/// the one kept. Missing text fields participate as empty strings — two
/// title-less postings at the same company will merge, the documented
/// trade-off of never erroring on sparse records.
pub fn deduplicate(postings: Vec<Posting>) -> Vec<Posting> {
    deduplicate_with_config(postings, EngineConfig::default())
}

/// [`deduplicate`] with an explicit [`EngineConfig`], for hosts that tune
/// the title similarity threshold.
pub fn deduplicate_with_config(postings: Vec<Posting>, config: EngineConfig) -> Vec<Posting> {
    let mut state = DedupState::with_config(config);
    for posting in postings {
        state.offer(posting);
    }
    state.into_retained()
}
