//! Shape recognizers for the four extracted fields.
//!
//! Each recognizer is a structural test only: it confirms that a piece of
//! text looks like a name line, an email, a phone number, or an education
//! entry with a year. Judging and cleaning the matches is the normalizers'
//! job. Patterns are compiled once per rule set; the default set is compiled
//! once per process behind a `LazyLock`.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::ExtractionRules;

/// The capitalized-word-then-"University" form is part of the anchor shape
/// itself, not the replaceable vocabulary.
const UNIVERSITY_FORM: &str = r"[A-Z][a-z]+\s+University";

static DEFAULT_PATTERNS: LazyLock<FieldPatterns> =
    LazyLock::new(|| FieldPatterns::compile(&ExtractionRules::default()));

/// Compiled recognizers for one rule set.
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    name_line: Regex,
    email: Regex,
    phone: Regex,
    graduation: Regex,
}

impl Default for FieldPatterns {
    /// Patterns for the built-in rules. Clones the shared compiled set
    /// (regexes are cheaply cloneable).
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

impl FieldPatterns {
    /// Compile the recognizers for a rule set. Anchor keywords are escaped
    /// before compilation, so arbitrary vocabulary entries cannot produce an
    /// invalid pattern.
    pub fn compile(rules: &ExtractionRules) -> Self {
        // Two or more whitespace-separated tokens of letters, periods,
        // hyphens and apostrophes, each at least two characters.
        let name_line = pattern(r"^[A-Za-z.'-]{2,}(?:\s+[A-Za-z.'-]{2,})+$");

        let email = pattern(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b");

        // Surface forms in precedence order. Word boundaries are per-branch:
        // `\b` cannot assert between whitespace and `(` or `+`, so the
        // parenthesized and international forms carry no leading boundary.
        let phone = pattern(
            r"(?x)
            \(\d{3}\)\s?\d{3}-\d{4}\b
            | \b\d{3}-\d{3}-\d{4}\b
            | \b\d{3}\.\d{3}\.\d{4}\b
            | \b\d{3}\s\d{3}\s\d{4}\b
            | \b\d{10}\b
            | \+\d{1,2}\s?\d{10}\b
            ",
        );

        let anchors = rules
            .education_anchors
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");
        let anchor_alt = if anchors.is_empty() {
            UNIVERSITY_FORM.to_string()
        } else {
            format!("{anchors}|{UNIVERSITY_FORM}")
        };
        // Anchor, then a non-digit gap on the same line, then a year range
        // (tried first, so ranges are captured whole) or a single year.
        let graduation = pattern(&format!(
            r"(?i)\b(?:{anchor_alt})\b[^0-9\r\n]*?(\d{{4}}(?:\s*[-–—]\s*\d{{4}})?)\b"
        ));

        Self {
            name_line,
            email,
            phone,
            graduation,
        }
    }

    /// Whole-line shape test for a candidate name. The line is expected to
    /// be trimmed already.
    pub fn is_name_line(&self, line: &str) -> bool {
        self.name_line.is_match(line)
    }

    /// First email-shaped token in the text, verbatim.
    pub fn first_email<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.email.find(text).map(|m| m.as_str())
    }

    /// First phone-shaped token in the text, verbatim.
    pub fn first_phone<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.phone.find(text).map(|m| m.as_str())
    }

    /// All year candidates in document order: for each anchor occurrence,
    /// the raw captured year or year range (for example `2019` or
    /// `2018 - 2022`). No validity judgment is made here.
    pub fn year_candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.graduation
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

fn pattern(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid field pattern")
}
