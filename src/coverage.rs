//! Distance-decay coverage model.
//!
//! Turns raw distances into per-candidate reach statistics: which demand
//! points a candidate can serve, at what weight, and what opening it is
//! effectively worth to the optimizer.

use rayon::prelude::*;
use tracing::debug;

use crate::haversine::DistanceMatrix;
use crate::model::{Candidate, ConstraintSet, DemandPoint};

/// Reach of a single candidate over the demand set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateCoverage {
    /// Demand indices within `max_distance_km`, ascending.
    pub reachable: Vec<usize>,
    /// Customers across all reachable demand points.
    pub reachable_count: u64,
    /// Customers weighted by distance decay.
    pub weighted_count: f64,
}

/// Coverage weight for a pair at distance `d`, `None` when out of range.
///
/// Full credit up to `decay_start_km`, then linear decay down to
/// `min_weight` at `max_distance_km`.
pub fn decay_weight(d: f64, constraints: &ConstraintSet) -> Option<f64> {
    if d > constraints.max_distance_km {
        return None;
    }
    if d <= constraints.decay_start_km {
        return Some(1.0);
    }
    let ratio = (d - constraints.decay_start_km)
        / (constraints.max_distance_km - constraints.decay_start_km);
    Some(1.0 - ratio * (1.0 - constraints.min_weight))
}

/// Per-candidate reach statistics, one entry per candidate.
pub fn build_coverage(
    matrix: &DistanceMatrix,
    demand: &[DemandPoint],
    constraints: &ConstraintSet,
) -> Vec<CandidateCoverage> {
    let coverage: Vec<CandidateCoverage> = (0..matrix.n_candidates())
        .into_par_iter()
        .map(|c| {
            let row = matrix.row(c);
            let mut cov = CandidateCoverage::default();
            for (k, point) in demand.iter().enumerate() {
                if let Some(weight) = decay_weight(row[k], constraints) {
                    cov.reachable.push(k);
                    cov.reachable_count += point.customer_count;
                    cov.weighted_count += point.customer_count as f64 * weight;
                }
            }
            cov
        })
        .collect();

    debug!(
        candidates = coverage.len(),
        demand_points = demand.len(),
        "coverage computed"
    );

    coverage
}

/// Effective per-candidate opening costs for the optimizer.
///
/// `cost_base` reduced by the tier bonus and by a density bonus scaled
/// with the candidate's weighted reach, min-max normalized across all
/// candidates. The optimizer only ever sees these scalars.
pub fn effective_costs(
    candidates: &[Candidate],
    coverage: &[CandidateCoverage],
    constraints: &ConstraintSet,
) -> Vec<f64> {
    let max = coverage
        .iter()
        .map(|c| c.weighted_count)
        .fold(f64::NEG_INFINITY, f64::max);
    let min = coverage
        .iter()
        .map(|c| c.weighted_count)
        .fold(f64::INFINITY, f64::min);

    candidates
        .iter()
        .zip(coverage)
        .map(|(candidate, cov)| {
            let density_factor = if max > min {
                (cov.weighted_count - min) / (max - min)
            } else {
                1.0
            };
            let tier_bonus = if candidate.is_top_tier {
                constraints.cost_top_city_bonus
            } else {
                constraints.cost_standard_bonus
            };
            candidate.cost_base - tier_bonus - density_factor * constraints.density_bonus
        })
        .collect()
}
