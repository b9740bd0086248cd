//! Text canonicalization for comparison keys.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NON_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]+").unwrap());

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalizes free text into a comparison key: lower-cased, stripped of
/// everything outside `[a-z0-9\s]`, whitespace runs collapsed to a single
/// space, trimmed.
///
/// Comparison-only — never shown to users. ASCII-centric on purpose: the
/// source feeds are English job boards, so non-ASCII letters are dropped
/// rather than transliterated. Idempotent and total; empty input yields "".
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = RE_NON_KEY.replace_all(&lowered, "");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Light normalization for skill labels: trim plus case-fold only, so
/// "C++" and "Node.js" keep the punctuation that distinguishes them.
pub fn normalize_skill(label: &str) -> String {
    label.trim().to_lowercase()
}
