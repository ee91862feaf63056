//! Sequence scanning: complementarity checking and restriction-site search
//!
//! Both scans walk a sequence, collect the positions satisfying a match
//! rule, and hand them to the annotator for rendering. Matching and
//! rendering stay decoupled so either can be swapped independently.

use super::alphabet::{complement_of, is_standard_base};
use super::error::ScanError;
use super::types::{ComplementReport, PairVerdict};

/// Check two strands for position-wise complementarity.
///
/// The only hard failure is a length mismatch. Individual characters are
/// never rejected: a character outside the DNA alphabet has no expected
/// complement and is reported as an anomaly at that position.
pub fn scan_complement(strand_a: &str, strand_b: &str) -> Result<ComplementReport, ScanError> {
    let a: Vec<char> = strand_a.chars().map(|c| c.to_ascii_uppercase()).collect();
    let b: Vec<char> = strand_b.chars().map(|c| c.to_ascii_uppercase()).collect();

    if a.len() != b.len() {
        return Err(ScanError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut verdicts = Vec::with_capacity(a.len());
    let mut anomalies = Vec::new();
    let mut match_count = 0;

    for (i, (&base_a, &base_b)) in a.iter().zip(b.iter()).enumerate() {
        let expected = complement_of(base_a);
        // An unrecognized base has expected == None, which can never
        // equal an observed character, so the position is an anomaly.
        let is_match = expected == Some(base_b);

        if is_match {
            match_count += 1;
        } else {
            anomalies.push(i);
        }

        verdicts.push(PairVerdict {
            position: i,
            base_a,
            base_b,
            expected,
            is_match,
        });
    }

    Ok(ComplementReport {
        strand_a: a.into_iter().collect(),
        strand_b: b.into_iter().collect(),
        verdicts,
        anomalies,
        match_count,
    })
}

/// Find every occurrence of a restriction site in a sequence.
///
/// Case-insensitive, overlapping: each start offset is tested
/// independently, so a match at `i` never suppresses one at `i + 1`.
/// Returns ascending 0-based start offsets; no occurrences is an empty
/// vec, not an error.
///
/// The pattern must be non-empty, no longer than the sequence, and
/// restricted to A/C/G/T. The sequence itself is not validated; foreign
/// characters simply never match.
pub fn scan_pattern(sequence: &str, pattern: &str) -> Result<Vec<usize>, ScanError> {
    let seq: Vec<char> = sequence.chars().map(|c| c.to_ascii_uppercase()).collect();
    let pat: Vec<char> = pattern.chars().map(|c| c.to_ascii_uppercase()).collect();

    if let Some(position) = pat.iter().position(|&c| !is_standard_base(c)) {
        return Err(ScanError::InvalidNucleotide {
            found: pat[position],
            position,
        });
    }
    if pat.is_empty() {
        return Err(ScanError::EmptyPattern);
    }
    if pat.len() > seq.len() {
        return Err(ScanError::PatternTooLong {
            pattern_len: pat.len(),
            sequence_len: seq.len(),
        });
    }

    // Deliberately a naive scan: overlap semantics must be preserved by
    // any faster substitute.
    let mut positions = Vec::new();
    for i in 0..=(seq.len() - pat.len()) {
        if seq[i..i + pat.len()] == pat[..] {
            positions.push(i);
        }
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_complement() {
        let report = scan_complement("ATGC", "TACG").unwrap();
        assert!(report.is_perfect());
        assert_eq!(report.match_count, 4);
        assert_eq!(report.verdicts.len(), 4);
        assert!(report.verdicts.iter().all(|v| v.is_match));
    }

    #[test]
    fn test_complement_anomalies() {
        let report = scan_complement("ATGC", "TAGG").unwrap();
        assert_eq!(report.anomalies, vec![2]);
        assert_eq!(report.match_count, 3);
        assert_eq!(report.verdicts[2].expected, Some('C'));
        assert_eq!(report.verdicts[2].base_b, 'G');
        assert!(!report.verdicts[2].is_match);
    }

    #[test]
    fn test_complement_length_mismatch() {
        let err = scan_complement("ATGC", "TAC").unwrap_err();
        assert_eq!(err, ScanError::LengthMismatch { left: 4, right: 3 });
    }

    #[test]
    fn test_complement_unknown_base_is_anomaly() {
        // 'X' has no complement, so the pair can never match
        let report = scan_complement("AXGC", "TACG").unwrap();
        assert_eq!(report.anomalies, vec![1]);
        assert_eq!(report.verdicts[1].expected, None);
    }

    #[test]
    fn test_complement_case_insensitive() {
        let report = scan_complement("atgc", "TACG").unwrap();
        assert!(report.is_perfect());
        assert_eq!(report.strand_a, "ATGC");
    }

    #[test]
    fn test_complement_verdict_order() {
        let report = scan_complement("AATT", "TTTT").unwrap();
        let positions: Vec<usize> = report.verdicts.iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(report.anomalies, vec![2, 3]);
    }

    #[test]
    fn test_pattern_basic() {
        assert_eq!(scan_pattern("ATCGATCG", "AT").unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_pattern_overlapping() {
        assert_eq!(scan_pattern("AAAA", "AA").unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_pattern_no_matches_is_ok() {
        assert_eq!(scan_pattern("ATCG", "GG").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_pattern_case_insensitive() {
        assert_eq!(
            scan_pattern("atcg", "AT").unwrap(),
            scan_pattern("ATCG", "AT").unwrap()
        );
        assert_eq!(scan_pattern("ATCG", "at").unwrap(), vec![0]);
    }

    #[test]
    fn test_pattern_invalid_nucleotide() {
        let err = scan_pattern("ATCGATCG", "AXT").unwrap_err();
        assert_eq!(
            err,
            ScanError::InvalidNucleotide {
                found: 'X',
                position: 1
            }
        );
    }

    #[test]
    fn test_pattern_empty() {
        assert_eq!(scan_pattern("ATCG", "").unwrap_err(), ScanError::EmptyPattern);
    }

    #[test]
    fn test_pattern_too_long() {
        let err = scan_pattern("AT", "ATCG").unwrap_err();
        assert_eq!(
            err,
            ScanError::PatternTooLong {
                pattern_len: 4,
                sequence_len: 2
            }
        );
    }

    #[test]
    fn test_validation_order_invalid_before_too_long() {
        // Both problems present; the nucleotide check fires first
        let err = scan_pattern("AT", "AXCG").unwrap_err();
        assert!(matches!(err, ScanError::InvalidNucleotide { .. }));
    }

    #[test]
    fn test_sequence_not_validated() {
        // Foreign characters in the searched sequence are permitted and
        // simply never match
        assert_eq!(scan_pattern("AT-NGAT", "AT").unwrap(), vec![0, 5]);
    }

    #[test]
    fn test_pattern_equal_lengths() {
        assert_eq!(scan_pattern("GAATTC", "GAATTC").unwrap(), vec![0]);
    }
}
