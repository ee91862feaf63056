//! Discrete-time logistic population growth model

use super::types::{GrowthParams, GrowthSummary};

/// Project a population trajectory under logistic growth.
///
/// Returns `steps + 1` values with `out[0] = p0` and
/// `out[t+1] = out[t] + r * out[t] * (1 - out[t] / k)`. No clamping is
/// performed: for growth rates outside the stable range the trajectory
/// may overshoot the carrying capacity, oscillate, or diverge.
pub fn project(p0: f64, r: f64, k: f64, steps: usize) -> Vec<f64> {
    let mut population = Vec::with_capacity(steps + 1);
    population.push(p0);

    for _ in 0..steps {
        let current = *population.last().unwrap();
        let next = current + r * current * (1.0 - current / k);
        population.push(next);
    }

    population
}

/// Project a trajectory from bundled parameters.
pub fn project_with(params: &GrowthParams) -> Vec<f64> {
    project(params.p0, params.r, params.k, params.steps)
}

/// Summary statistics for a projected trajectory.
pub fn summarize(population: &[f64], k: f64) -> GrowthSummary {
    let final_population = population.last().copied().unwrap_or(0.0);
    let peak_population = population.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    GrowthSummary {
        final_population,
        peak_population: if peak_population.is_finite() {
            peak_population
        } else {
            0.0
        },
        percent_of_capacity: if k > 0.0 {
            (final_population / k) * 100.0
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_shape() {
        let pop = project(100.0, 0.5, 10000.0, 50);
        assert_eq!(pop.len(), 51);
        assert_eq!(pop[0], 100.0);
    }

    #[test]
    fn test_stable_rate_stays_within_capacity() {
        let k = 10000.0;
        let pop = project(100.0, 0.5, k, 200);
        assert!(pop.iter().all(|&p| p >= 0.0 && p <= k));
        // Converges to the carrying capacity in the limit
        assert!((pop.last().unwrap() - k).abs() < 1.0);
    }

    #[test]
    fn test_monotonic_approach_below_capacity() {
        let pop = project(100.0, 0.5, 10000.0, 50);
        for pair in pop.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_zero_steps() {
        let pop = project(100.0, 0.5, 10000.0, 0);
        assert_eq!(pop, vec![100.0]);
    }

    #[test]
    fn test_at_capacity_is_fixed_point() {
        let pop = project(10000.0, 0.5, 10000.0, 10);
        assert!(pop.iter().all(|&p| p == 10000.0));
    }

    #[test]
    fn test_project_with_defaults() {
        let params = GrowthParams::default();
        let pop = project_with(&params);
        assert_eq!(pop.len(), 51);
        assert_eq!(pop[0], 100.0);
    }

    #[test]
    fn test_summarize() {
        let pop = project(100.0, 0.5, 10000.0, 200);
        let summary = summarize(&pop, 10000.0);
        assert!(summary.final_population > 9999.0);
        assert!(summary.peak_population >= summary.final_population);
        assert!(summary.percent_of_capacity > 99.9);
        assert!(summary.percent_of_capacity <= 100.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], 10000.0);
        assert_eq!(summary.final_population, 0.0);
        assert_eq!(summary.peak_population, 0.0);
    }
}
