//! Error taxonomy for the scanning functions
//!
//! Validation failures are detected before any scanning work begins and
//! returned as values; zero matches and unrecognized characters in a
//! scanned sequence are reportable results, not errors.

use std::fmt;

/// A scan that could not be performed on the given inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Complement scan: the two strands have different lengths.
    LengthMismatch { left: usize, right: usize },
    /// Pattern scan: the pattern contains a character outside A/C/G/T.
    InvalidNucleotide { found: char, position: usize },
    /// Pattern scan: the pattern is empty.
    EmptyPattern,
    /// Pattern scan: the pattern is longer than the searched sequence.
    PatternTooLong {
        pattern_len: usize,
        sequence_len: usize,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::LengthMismatch { left, right } => write!(
                f,
                "Strands must be of equal length ({} bp vs {} bp)",
                left, right
            ),
            ScanError::InvalidNucleotide { found, position } => write!(
                f,
                "Restriction site contains invalid DNA nucleotide '{}' at position {}",
                found,
                position + 1
            ),
            ScanError::EmptyPattern => write!(f, "Restriction site cannot be empty"),
            ScanError::PatternTooLong {
                pattern_len,
                sequence_len,
            } => write!(
                f,
                "Restriction site ({} bp) is longer than the DNA sequence ({} bp)",
                pattern_len, sequence_len
            ),
        }
    }
}

impl std::error::Error for ScanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        let err = ScanError::LengthMismatch { left: 4, right: 6 };
        assert!(err.to_string().contains("equal length"));

        let err = ScanError::InvalidNucleotide {
            found: 'X',
            position: 2,
        };
        assert!(err.to_string().contains('X'));
        assert!(err.to_string().contains('3')); // 1-based in messages

        assert!(ScanError::EmptyPattern.to_string().contains("empty"));
    }
}
