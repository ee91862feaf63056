//! Data types for sequence scans and growth projections

use serde::{Deserialize, Serialize};

/// Verdict for one aligned position of a complement scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairVerdict {
    /// 0-based position in both strands
    pub position: usize,
    /// Base observed on the first strand (uppercased)
    pub base_a: char,
    /// Base observed on the second strand (uppercased)
    pub base_b: char,
    /// Complement the first strand calls for; `None` if `base_a` is not
    /// a recognized base
    pub expected: Option<char>,
    pub is_match: bool,
}

/// Complete result of checking two strands for complementarity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplementReport {
    /// First strand, uppercased
    pub strand_a: String,
    /// Second strand, uppercased
    pub strand_b: String,
    /// One verdict per position, in index order
    pub verdicts: Vec<PairVerdict>,
    /// 0-based positions that failed the complement relation, ascending
    pub anomalies: Vec<usize>,
    pub match_count: usize,
}

impl ComplementReport {
    pub fn is_perfect(&self) -> bool {
        self.anomalies.is_empty()
    }

    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }
}

/// A contiguous run of flagged positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// 0-based start offset
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Complete result of a restriction-site search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternReport {
    /// Searched sequence, uppercased
    pub sequence: String,
    /// Searched site, uppercased
    pub pattern: String,
    /// 0-based start offsets of every occurrence, ascending
    pub positions: Vec<usize>,
}

impl PatternReport {
    pub fn site_count(&self) -> usize {
        self.positions.len()
    }

    /// Occurrences as spans of the pattern's length, in match order
    pub fn spans(&self) -> Vec<Span> {
        let len = self.pattern.chars().count();
        self.positions.iter().map(|&p| Span::new(p, len)).collect()
    }
}

/// Parameters for the logistic growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    /// Initial population size
    pub p0: f64,
    /// Per-generation growth rate; values above 1.0 may be unstable
    pub r: f64,
    /// Carrying capacity
    pub k: f64,
    /// Number of generations to project
    pub steps: usize,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            p0: 100.0,
            r: 0.5,
            k: 10000.0,
            steps: 50,
        }
    }
}

/// Summary statistics over a projected trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub final_population: f64,
    pub peak_population: f64,
    /// Final population as a percentage of carrying capacity
    pub percent_of_capacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_end() {
        let span = Span::new(4, 6);
        assert_eq!(span.end(), 10);
    }

    #[test]
    fn test_pattern_report_spans() {
        let report = PatternReport {
            sequence: "GAATTCGG".to_string(),
            pattern: "GAATTC".to_string(),
            positions: vec![0],
        };
        assert_eq!(report.site_count(), 1);
        assert_eq!(report.spans(), vec![Span::new(0, 6)]);
    }

    #[test]
    fn test_default_growth_params() {
        let params = GrowthParams::default();
        assert_eq!(params.p0, 100.0);
        assert_eq!(params.r, 0.5);
        assert_eq!(params.k, 10000.0);
        assert_eq!(params.steps, 50);
    }
}
