//! Cleaning of pasted or file-loaded sequence text
//!
//! Prompting and retry loops live in the UI; the analysis functions only
//! ever see cleaned strings produced here.

/// Clean raw sequence text: drop whitespace, uppercase the rest.
///
/// No alphabet filtering happens here. The complement scan reports
/// foreign characters as anomalies and the pattern scan ignores them, so
/// cleaning must not silently delete them.
pub fn clean_sequence(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_whitespace() {
        assert_eq!(clean_sequence(" AT GC\nAT\tGC "), "ATGCATGC");
    }

    #[test]
    fn test_clean_uppercases() {
        assert_eq!(clean_sequence("atgc"), "ATGC");
    }

    #[test]
    fn test_clean_keeps_foreign_characters() {
        // Foreign characters are scan results, not input errors
        assert_eq!(clean_sequence("at-ngc"), "AT-NGC");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_sequence("  \n "), "");
    }
}
