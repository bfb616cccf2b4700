//! Field extraction over a single document's text.

use super::normalize;
use super::patterns::FieldPatterns;
use super::rules::ExtractionRules;
use super::types::ExtractedFields;

/// Pulls the four resume fields out of plain text.
///
/// Extraction is infallible: a text that matches nothing yields a record
/// with every field absent, never an error. The four fields are looked up
/// independently, so garbage in the header cannot hide an email further
/// down the document.
pub struct FieldExtractor {
    patterns: FieldPatterns,
    rules: ExtractionRules,
}

impl FieldExtractor {
    /// Compile the recognizers for the given rule set.
    pub fn new(rules: ExtractionRules) -> Self {
        let patterns = FieldPatterns::compile(&rules);
        Self { patterns, rules }
    }

    pub fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            name: normalize::select_name(text, &self.patterns, &self.rules),
            email: self
                .patterns
                .first_email(text)
                .map(|raw| normalize::correct_email_domain(raw, &self.rules)),
            phone: self.patterns.first_phone(text).map(str::to_string),
            graduation_year: normalize::resolve_graduation_year(
                &self.patterns.year_candidates(text),
            ),
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self {
            patterns: FieldPatterns::default(),
            rules: ExtractionRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn assert_no_empty_strings(fields: &ExtractedFields) {
        assert_ne!(fields.name.as_deref(), Some(""));
        assert_ne!(fields.email.as_deref(), Some(""));
        assert_ne!(fields.phone.as_deref(), Some(""));
        assert_ne!(fields.graduation_year.as_deref(), Some(""));
    }

    // =================================================================
    // FULL DOCUMENTS
    // =================================================================

    #[test]
    fn clean_resume_yields_all_four_fields() {
        let text = "John A. Smith\n\
                    john.smith@gamil.com\n\
                    (555) 123-4567\n\
                    Bachelor of Science, XYZ University 2018 - 2022";
        let fields = FieldExtractor::default().extract(text);

        assert_eq!(fields.name.as_deref(), Some("John A. Smith"));
        assert_eq!(fields.email.as_deref(), Some("john.smith@gmail.com"));
        assert_eq!(fields.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(fields.graduation_year.as_deref(), Some("2022"));
    }

    #[test]
    fn contact_header_yields_phone_but_no_name() {
        let fields = FieldExtractor::default().extract("Contact: mobile 555-000-1111");
        assert_eq!(fields.name, None);
        assert_eq!(fields.phone.as_deref(), Some("555-000-1111"));
        assert_eq!(fields.email, None);
        assert_eq!(fields.graduation_year, None);
    }

    #[test]
    fn empty_text_yields_nothing() {
        let fields = FieldExtractor::default().extract("");
        assert_eq!(fields, ExtractedFields::default());
        assert!(!fields.has_any_field());
    }

    #[test]
    fn fields_are_looked_up_independently() {
        // A header too mangled to contain a name still lets the email and
        // year through.
        let text = "@@@@ ##### @@@@\n\
                    reach me at jane.doe@yaho.com\n\
                    Graduated 2019";
        let fields = FieldExtractor::default().extract(text);

        assert_eq!(fields.name, None);
        assert_eq!(fields.email.as_deref(), Some("jane.doe@yahoo.com"));
        assert_eq!(fields.graduation_year.as_deref(), Some("2019"));
    }

    #[test]
    fn phone_is_reported_verbatim() {
        let texts = [
            "call 555.123.4567 anytime",
            "call 5551234567 anytime",
            "call +91 9876543210 anytime",
        ];
        let expected = ["555.123.4567", "5551234567", "+91 9876543210"];
        let extractor = FieldExtractor::default();
        for (text, want) in texts.iter().zip(expected) {
            assert_eq!(extractor.extract(text).phone.as_deref(), Some(want));
        }
    }

    #[test]
    fn implausible_year_near_anchor_is_ignored() {
        let fields = FieldExtractor::default().extract("University of Antiquity, 1950");
        assert_eq!(fields.graduation_year, None);
    }

    #[test]
    fn extracted_values_are_never_empty_strings() {
        let extractor = FieldExtractor::default();
        let samples = [
            "",
            "\n\n\n",
            "John Smith",
            "Contact: mobile 555-000-1111",
            "Bachelor of Arts, 2019\nx@y.com",
        ];
        for text in samples {
            assert_no_empty_strings(&extractor.extract(text));
        }
    }

    // =================================================================
    // CUSTOM RULES
    // =================================================================

    #[test]
    fn custom_rules_flow_through_every_field() {
        let rules = ExtractionRules {
            email_domain_corrections: BTreeMap::from([(
                "gmali.com".to_string(),
                "gmail.com".to_string(),
            )]),
            name_denylist: vec!["header".to_string()],
            education_anchors: vec!["Bootcamp".to_string()],
            name_scan_window: 10,
        };
        let text = "Header Line\n\
                    Jane Doe\n\
                    jane@gmali.com\n\
                    Bootcamp 2021";
        let fields = FieldExtractor::new(rules).extract(text);

        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.email.as_deref(), Some("jane@gmail.com"));
        assert_eq!(fields.graduation_year.as_deref(), Some("2021"));
    }

    #[test]
    fn narrow_scan_window_limits_the_name_search() {
        let rules = ExtractionRules {
            name_scan_window: 1,
            ..Default::default()
        };
        let fields = FieldExtractor::new(rules).extract("Objective\nJohn Smith");
        assert_eq!(fields.name, None);
    }
}
