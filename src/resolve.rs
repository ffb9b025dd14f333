//! Post-solve overlap resolution.
//!
//! The optimizer's coverage constraint counts a demand point once per
//! opened candidate that reaches it. This pass attributes every reachable
//! demand point to exactly one opened candidate so downstream statistics
//! never double count.

use tracing::debug;

use crate::coverage::CandidateCoverage;
use crate::haversine::DistanceMatrix;
use crate::model::Candidate;

/// Assign each demand point to its nearest opened candidate.
///
/// Returns one entry per demand point: the opened candidate index it is
/// attributed to, or `None` when no opened candidate reaches it. Ties go
/// to the lowest candidate id, so rerunning over the same opened set
/// reproduces the same assignment.
pub fn resolve_overlaps(
    n_demand: usize,
    candidates: &[Candidate],
    opened: &[usize],
    coverage: &[CandidateCoverage],
    matrix: &DistanceMatrix,
) -> Vec<Option<usize>> {
    // Scan opened candidates in id order; the strict `<` below then keeps
    // the lowest id among equidistant locations.
    let mut by_id: Vec<usize> = opened.to_vec();
    by_id.sort_by(|a, b| candidates[*a].id.cmp(&candidates[*b].id));

    let mut best: Vec<Option<(usize, f64)>> = vec![None; n_demand];
    for &c in &by_id {
        for &k in &coverage[c].reachable {
            let d = matrix.km(c, k);
            match best[k] {
                Some((_, best_d)) if d >= best_d => {}
                _ => best[k] = Some((c, d)),
            }
        }
    }

    let assigned = best.iter().filter(|b| b.is_some()).count();
    debug!(assigned, demand_points = n_demand, "overlaps resolved");

    best.into_iter().map(|b| b.map(|(c, _)| c)).collect()
}
