use serde::{Deserialize, Serialize};

/// The four fields pulled from a single resume. Every field is optional
/// and extracted independently; a miss on one never blocks the others.
/// An extracted value is never the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
}

impl ExtractedFields {
    /// True when at least one field was found. Documents where this is
    /// false are counted but excluded from the report rows.
    pub fn has_any_field(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.graduation_year.is_some()
    }
}

/// Extraction output tied back to the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Display identity of the source document, normally its file name.
    pub source_id: String,
    pub fields: ExtractedFields,
}

impl ExtractedRecord {
    pub fn new(source_id: impl Into<String>, fields: ExtractedFields) -> Self {
        Self {
            source_id: source_id.into(),
            fields,
        }
    }
}
