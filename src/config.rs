/// Application-level constants
pub const DEFAULT_OUTPUT_FILE: &str = "resume_info.csv";

/// File extensions considered part of a resume collection.
/// Anything else in the scanned directory is ignored without comment.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

/// Hard cap on document size. Resumes are small; anything beyond this
/// is almost certainly not one.
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_csv() {
        assert!(DEFAULT_OUTPUT_FILE.ends_with(".csv"));
    }

    #[test]
    fn supported_extensions_are_lowercase() {
        for ext in SUPPORTED_EXTENSIONS {
            assert_eq!(ext, ext.to_ascii_lowercase());
        }
    }

    #[test]
    fn supported_extensions_include_pdf() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"pdf"));
    }
}
