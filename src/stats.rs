//! Final per-location and global service statistics.
//!
//! Everything a presentation layer shows comes from this single pass over
//! the resolved assignment, so CSV totals and map popups cannot diverge.

use serde::Serialize;

use crate::coverage::CandidateCoverage;
use crate::model::{Candidate, DemandPoint};

/// Service statistics for one opened location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStats {
    pub id: String,
    /// Customers within range, regardless of assignment.
    pub reachable_count: u64,
    /// Customers attributed to this location after overlap resolution.
    pub served_count: u64,
    /// served / reachable, 0 when nothing is reachable.
    pub served_ratio: f64,
}

/// Totals across the whole solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_customers: u64,
    /// Customers reachable by at least one opened location, counted once.
    pub total_reachable: u64,
    /// Customers attributed to an opened location. Equals
    /// `total_reachable` since every reachable point gets assigned.
    pub total_served: u64,
    pub achieved_service_level: f64,
}

/// Derive per-location and global statistics from a resolved assignment.
///
/// Location rows come back sorted by served customers, descending.
pub fn aggregate(
    candidates: &[Candidate],
    demand: &[DemandPoint],
    opened: &[usize],
    coverage: &[CandidateCoverage],
    assignment: &[Option<usize>],
) -> (Vec<LocationStats>, GlobalStats) {
    let mut served = vec![0u64; candidates.len()];
    for (k, assigned) in assignment.iter().enumerate() {
        if let Some(c) = assigned {
            served[*c] += demand[k].customer_count;
        }
    }

    let mut locations: Vec<LocationStats> = opened
        .iter()
        .map(|&c| {
            let reachable_count = coverage[c].reachable_count;
            let served_count = served[c];
            LocationStats {
                id: candidates[c].id.clone(),
                reachable_count,
                served_count,
                served_ratio: if reachable_count > 0 {
                    served_count as f64 / reachable_count as f64
                } else {
                    0.0
                },
            }
        })
        .collect();
    locations.sort_by(|a, b| {
        b.served_count
            .cmp(&a.served_count)
            .then_with(|| a.id.cmp(&b.id))
    });

    // total_reachable is counted independently of the assignment so the
    // served == reachable invariant stays checkable.
    let mut reachable_any = vec![false; demand.len()];
    for &c in opened {
        for &k in &coverage[c].reachable {
            reachable_any[k] = true;
        }
    }
    let total_reachable: u64 = reachable_any
        .iter()
        .zip(demand)
        .filter(|(reached, _)| **reached)
        .map(|(_, d)| d.customer_count)
        .sum();

    let total_customers: u64 = demand.iter().map(|d| d.customer_count).sum();
    let total_served: u64 = locations.iter().map(|l| l.served_count).sum();

    let totals = GlobalStats {
        total_customers,
        total_reachable,
        total_served,
        achieved_service_level: if total_customers > 0 {
            total_served as f64 / total_customers as f64
        } else {
            0.0
        },
    };

    (locations, totals)
}
