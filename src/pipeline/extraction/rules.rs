//! Tunable vocabularies for the field heuristics.
//!
//! Everything a deployment might want to adjust without touching matching
//! logic lives here: the email-domain correction table, the name denylist,
//! the education anchor keywords, and the name scan window. A JSON file can
//! override any subset of the defaults; unspecified fields keep them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rules file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The replaceable rule set driving extraction.
///
/// `Default` holds the built-in vocabularies. Deserialization fills missing
/// fields from `Default`, so a rules file only needs the entries it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Known provider-domain misspellings, keyed by lowercase domain.
    pub email_domain_corrections: BTreeMap<String, String>,
    /// Section-header words that disqualify a name-shaped line.
    pub name_denylist: Vec<String>,
    /// Keywords that anchor a graduation-year match. Matched literally
    /// (escaped before compilation), case-insensitively.
    pub education_anchors: Vec<String>,
    /// How many leading lines are searched for the candidate name.
    pub name_scan_window: usize,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        let email_domain_corrections = BTreeMap::from(
            [
                ("gamil.com", "gmail.com"),
                ("gmial.com", "gmail.com"),
                ("yaho.com", "yahoo.com"),
                ("hotmal.com", "hotmail.com"),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        );

        Self {
            email_domain_corrections,
            name_denylist: [
                "mobile", "contact", "portfolio", "link", "email", "phone", "resume", "address",
            ]
            .map(String::from)
            .to_vec(),
            education_anchors: [
                "Bachelor", "B.Tech", "B.Sc", "M.Tech", "M.Sc", "Master", "Degree", "Graduated",
                "Diploma", "University", "College", "Institute",
            ]
            .map(String::from)
            .to_vec(),
            name_scan_window: 10,
        }
    }
}

impl ExtractionRules {
    /// Load rules from a JSON file. Fields absent from the file keep their
    /// built-in defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, RulesError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Look up the corrected spelling for a domain. The key comparison is
    /// case-insensitive; the returned value is the canonical lowercase domain.
    pub fn corrected_domain(&self, domain: &str) -> Option<&str> {
        self.email_domain_corrections
            .get(&domain.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// True if the line contains any denylisted word, case-insensitively.
    pub fn is_denylisted(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.name_denylist
            .iter()
            .any(|word| lower.contains(&word.to_lowercase()))
    }
}
