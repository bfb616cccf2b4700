//! Per-field cleanup applied on top of the shape recognizers.
//!
//! Each field has its own business rule: names are taken from a bounded
//! window of leading lines and filtered against the denylist, email domains
//! are corrected against the known-typo table, phones pass through verbatim
//! (the engine emits the raw match), and year ranges collapse to their
//! trailing year inside a fixed plausibility bound.

use super::patterns::FieldPatterns;
use super::rules::ExtractionRules;

/// Inclusive plausibility bounds for a graduation year. Candidates outside
/// are rejected and scanning continues.
pub const MIN_GRADUATION_YEAR: i32 = 1980;
pub const MAX_GRADUATION_YEAR: i32 = 2025;

/// Pick the candidate name: the first line within the scan window that has
/// the name shape and carries no denylisted word. Lines are trimmed first;
/// blank lines still consume window slots.
pub fn select_name(
    text: &str,
    patterns: &FieldPatterns,
    rules: &ExtractionRules,
) -> Option<String> {
    text.lines()
        .take(rules.name_scan_window)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| patterns.is_name_line(line) && !rules.is_denylisted(line))
        .map(str::to_string)
}

/// Replace a known-misspelled provider domain, leaving the local part
/// untouched. The lookup key is the lowercased text after the last `@`;
/// unknown domains pass through with their original casing.
pub fn correct_email_domain(raw: &str, rules: &ExtractionRules) -> String {
    let Some(at) = raw.rfind('@') else {
        return raw.to_string();
    };
    match rules.corrected_domain(&raw[at + 1..]) {
        Some(fixed) => format!("{}@{fixed}", &raw[..at]),
        None => raw.to_string(),
    }
}

/// Resolve the graduation year from raw candidates in document order.
/// A range counts as its trailing year, so `2018 - 2022` and `2018-2022`
/// both resolve to `2022`. The first candidate inside the plausibility
/// bounds wins; out-of-range or non-numeric candidates are skipped.
pub fn resolve_graduation_year(candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        let year = trailing_year(candidate);
        if let Ok(value) = year.parse::<i32>() {
            if (MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR).contains(&value) {
                return Some(year.to_string());
            }
        }
    }
    None
}

/// Trailing year of a possibly-ranged candidate: last whitespace-separated
/// token, then the segment after its last hyphen, en dash or em dash.
fn trailing_year(raw: &str) -> &str {
    let token = raw.split_whitespace().last().unwrap_or(raw);
    token.rsplit(['-', '–', '—']).next().unwrap_or(token)
}
